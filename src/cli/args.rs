//! Command-line argument definitions for the weather filter
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::DEFAULT_LOG_FILENAME;
use std::path::PathBuf;

/// CLI arguments for the weather record filter
///
/// Reads weather station records from a CSV file, keeps rows whose
/// temperature meets the minimum threshold, and writes them to a new CSV
/// file, appending one summary line to an audit log.
#[derive(Debug, Clone, clap::Parser)]
#[command(
    name = "weather_filter",
    version,
    about = "Filter weather station records by temperature"
)]
pub struct FilterArgs {
    /// Input CSV file with a header row
    #[arg(short = 'i', long = "input", value_name = "PATH", help = "Input file path")]
    pub input: PathBuf,

    /// Output CSV file
    ///
    /// Fully overwritten each run. Parent directories are created if needed.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file path"
    )]
    pub output: PathBuf,

    /// Inclusive minimum temperature threshold
    ///
    /// Records with a temperature greater than or equal to this value are kept.
    #[arg(
        long = "temp-min",
        value_name = "FLOAT",
        allow_hyphen_values = true,
        help = "Minimum temperature threshold"
    )]
    pub temp_min: f64,

    /// Temperature column name, bypassing auto-detection
    ///
    /// If not given, the column is detected from the header by trying
    /// temperature, temp, tavg, tmax and tmin case-insensitively.
    #[arg(
        long = "temp-field",
        value_name = "NAME",
        help = "Temperature column name (optional)"
    )]
    pub temp_field: Option<String>,

    /// Audit log destination
    #[arg(
        long = "log",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILENAME,
        help = "Log file path"
    )]
    pub log: PathBuf,

    /// Copy all records without filtering or audit logging
    #[arg(long = "no-filter", help = "Copy all records verbatim, skip filtering and logging")]
    pub no_filter: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress diagnostic output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress diagnostics except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl FilterArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> FilterArgs {
        let mut argv = vec![
            "weather_filter",
            "-i",
            "in.csv",
            "-o",
            "out.csv",
            "--temp-min",
            "0",
        ];
        argv.extend_from_slice(extra);
        FilterArgs::parse_from(argv)
    }

    #[test]
    fn test_required_arguments() {
        let args = parse(&[]);
        assert_eq!(args.input, PathBuf::from("in.csv"));
        assert_eq!(args.output, PathBuf::from("out.csv"));
        assert_eq!(args.temp_min, 0.0);
        assert_eq!(args.temp_field, None);
        assert!(!args.no_filter);
    }

    #[test]
    fn test_missing_required_arguments_fail() {
        let result = FilterArgs::try_parse_from(["weather_filter", "-i", "in.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_threshold_parses() {
        let argv = [
            "weather_filter",
            "-i",
            "in.csv",
            "-o",
            "out.csv",
            "--temp-min",
            "-5.5",
        ];
        let args = FilterArgs::parse_from(argv);
        assert_eq!(args.temp_min, -5.5);
    }

    #[test]
    fn test_log_defaults_to_working_directory_file() {
        let args = parse(&[]);
        assert_eq!(args.log, PathBuf::from("weather_filter.log"));

        let args = parse(&["--log", "logs/audit.log"]);
        assert_eq!(args.log, PathBuf::from("logs/audit.log"));
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&[]);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = FilterArgs::try_parse_from([
            "weather_filter",
            "-i",
            "in.csv",
            "-o",
            "out.csv",
            "--temp-min",
            "0",
            "-v",
            "-q",
        ]);
        assert!(result.is_err());
    }
}
