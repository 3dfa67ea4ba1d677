//! Pipeline driver for the weather filter CLI
//!
//! Orchestrates a single run: load, field detection, filtering, output
//! write, audit logging and the human-readable summary.

use crate::app::models::{FilterResult, FilterStats};
use crate::app::services::audit_log::append_run_entry;
use crate::app::services::csv_table::{load_csv, write_csv};
use crate::app::services::field_detection::detect_temperature_field;
use crate::app::services::record_filter::filter_records;
use crate::cli::args::FilterArgs;
use crate::config::RunConfig;
use crate::{Error, Result};
use tracing::{debug, info};

/// Run one filtering pass from parsed CLI arguments.
///
/// Validates the input path before any read, loads all records, resolves the
/// temperature field, filters, writes the output and attempts the audit log.
/// A logging failure is reported as a warning on stderr and does not fail
/// the run. In the copy-only configuration every record is written verbatim
/// with no detection, filtering or audit entry.
pub fn run(args: FilterArgs) -> Result<FilterStats> {
    setup_logging(&args);

    let config = RunConfig::from_args(&args);
    debug!("Run configuration: {:?}", config);

    if !config.input.exists() {
        return Err(Error::input_not_found(config.input.display().to_string()));
    }

    let table = load_csv(&config.input)?;

    if !config.filtering_enabled {
        info!("Filtering disabled; copying all records");
        write_csv(&config.output, &table.records, &table.fields)?;
        let stats = FilterStats::passthrough(table.records.len());
        print_summary(&stats, &config);
        return Ok(stats);
    }

    let temp_field = detect_temperature_field(&table.records, config.temp_field.as_deref())
        .ok_or(Error::FieldUndetermined)?;
    info!("Filtering on '{}' >= {}", temp_field, config.temp_min);

    let FilterResult { records, stats } =
        filter_records(table.records, &temp_field, config.temp_min);

    write_csv(&config.output, &records, &table.fields)?;

    if let Err(e) = append_run_entry(
        &config.log_path,
        &config.input,
        &config.output,
        &temp_field,
        config.temp_min,
        &stats,
    ) {
        eprintln!("Warning: failed to write log: {}", e);
    }

    print_summary(&stats, &config);

    Ok(stats)
}

/// Print the one-line run summary to stdout
fn print_summary(stats: &FilterStats, config: &RunConfig) {
    println!(
        "Read {} records; wrote {} to {}",
        stats.read,
        stats.written,
        config.output.display()
    );
}

/// Set up tracing output to stderr based on the verbosity flags.
///
/// Safe to call more than once; later calls are no-ops.
fn setup_logging(args: &FilterArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_filter={}", args.get_log_level())));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
