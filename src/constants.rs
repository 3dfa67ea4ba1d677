//! Application constants for the weather filter
//!
//! This module contains the candidate column names, detection bounds,
//! and default values used throughout the application.

/// Candidate temperature column names, in priority order.
///
/// Detection is case-insensitive; the first candidate found in a record's
/// header wins. `temperature` is preferred over the aggregate columns
/// (`tavg`, `tmax`, `tmin`) used by daily summary datasets.
pub const TEMP_FIELD_CANDIDATES: &[&str] = &["temperature", "temp", "tavg", "tmax", "tmin"];

/// Number of leading records inspected during field auto-detection.
///
/// A bound on work, not on correctness: the header is uniform across all
/// records in a run, so inspecting more rows cannot change the outcome.
pub const FIELD_DETECTION_SAMPLE_SIZE: usize = 25;

/// Default audit log filename, relative to the working directory
pub const DEFAULT_LOG_FILENAME: &str = "weather_filter.log";

/// Separator between key=value fields in an audit log line
pub const AUDIT_FIELD_SEPARATOR: &str = " | ";

/// Timestamp format for audit log lines: local ISO 8601 with UTC offset,
/// second precision (e.g. `2026-08-27T14:03:59+01:00`)
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
