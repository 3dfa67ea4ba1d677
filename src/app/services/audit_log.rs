//! Append-only audit logging for filtering runs
//!
//! Each run appends exactly one structured line to the audit log. The line
//! format is an external contract consumed by downstream tooling, so field
//! order and the `" | "` separator are fixed.

use crate::app::models::FilterStats;
use crate::constants::{AUDIT_FIELD_SEPARATOR, AUDIT_TIMESTAMP_FORMAT};
use crate::{Error, Result};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Append one summary line for a completed run to the audit log.
///
/// Parent directories are created if absent. The file is opened in append
/// mode and never truncated; prior lines are preserved. Failures propagate
/// to the caller, which treats them as non-fatal warnings.
pub fn append_run_entry(
    log_path: &Path,
    input: &Path,
    output: &Path,
    temp_field: &str,
    temp_min: f64,
    stats: &FilterStats,
) -> Result<()> {
    let line = format_entry(input, output, temp_field, temp_min, stats);

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("failed to create log directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| Error::io(format!("failed to open log {}", log_path.display()), e))?;

    file.write_all(line.as_bytes())
        .map_err(|e| Error::io(format!("failed to append to log {}", log_path.display()), e))?;

    debug!("Appended audit entry to {}", log_path.display());

    Ok(())
}

/// Format a single audit log line, newline-terminated.
///
/// `{:?}` keeps integral thresholds rendered with a trailing `.0`.
fn format_entry(
    input: &Path,
    output: &Path,
    temp_field: &str,
    temp_min: f64,
    stats: &FilterStats,
) -> String {
    let timestamp = Local::now().format(AUDIT_TIMESTAMP_FORMAT);
    let fields = [
        format!("input={}", input.display()),
        format!("output={}", output.display()),
        format!("temp_field={}", temp_field),
        format!("temp_min={:?}", temp_min),
        format!("read={}", stats.read),
        format!("written={}", stats.written),
        format!("skip_missing_temp={}", stats.skipped_missing_temp),
        format!("skip_bad_temp={}", stats.skipped_bad_temp),
    ];

    format!(
        "{}{}{}\n",
        timestamp,
        AUDIT_FIELD_SEPARATOR,
        fields.join(AUDIT_FIELD_SEPARATOR)
    )
}
