//! Run configuration for the weather filter.
//!
//! Arguments are parsed once at startup into an immutable configuration
//! structure passed explicitly to the pipeline; no global mutable state.

use crate::cli::args::FilterArgs;
use std::path::PathBuf;

/// Immutable configuration for a single filtering run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input CSV file
    pub input: PathBuf,
    /// Output CSV file (fully overwritten each run)
    pub output: PathBuf,
    /// Inclusive minimum temperature threshold
    pub temp_min: f64,
    /// Explicit temperature column override, bypassing auto-detection
    pub temp_field: Option<String>,
    /// Audit log destination
    pub log_path: PathBuf,
    /// Whether filtering and audit logging are enabled.
    ///
    /// When disabled the run copies every input record to the output
    /// verbatim: no field detection, no threshold, no audit line. This is
    /// the degraded copy-only configuration, not a second code path.
    pub filtering_enabled: bool,
}

impl RunConfig {
    /// Build the run configuration from parsed CLI arguments
    pub fn from_args(args: &FilterArgs) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            temp_min: args.temp_min,
            temp_field: args.temp_field.clone(),
            log_path: args.log.clone(),
            filtering_enabled: !args.no_filter,
        }
    }
}
