//! Temperature field detection for weather records
//!
//! Determines which column holds the temperature observation, either from an
//! explicit override or by scanning a sample of records for well-known
//! column names.

use crate::app::models::Record;
use crate::constants::{FIELD_DETECTION_SAMPLE_SIZE, TEMP_FIELD_CANDIDATES};
use std::collections::HashMap;
use tracing::debug;

/// Determine the column name holding temperature.
///
/// An explicit non-empty `preferred` name is returned unconditionally; its
/// existence is not validated here, rows lacking it are counted as missing
/// by the filter. Otherwise the first [`FIELD_DETECTION_SAMPLE_SIZE`] records
/// are scanned: for each record the candidates in [`TEMP_FIELD_CANDIDATES`]
/// are tried in priority order against a case-insensitive view of its column
/// names, and the first record yielding any match wins. The matched column's
/// original-case name is returned.
///
/// Returns `None` when there are no records or no candidate matches.
pub fn detect_temperature_field(records: &[Record], preferred: Option<&str>) -> Option<String> {
    if let Some(name) = preferred.filter(|name| !name.is_empty()) {
        debug!("Using explicit temperature field: {}", name);
        return Some(name.to_string());
    }

    for record in records.iter().take(FIELD_DETECTION_SAMPLE_SIZE) {
        let lower_map: HashMap<String, &str> = record
            .field_names()
            .map(|name| (name.to_lowercase(), name))
            .collect();

        for candidate in TEMP_FIELD_CANDIDATES {
            if let Some(original) = lower_map.get(*candidate) {
                debug!("Detected temperature field: {}", original);
                return Some(original.to_string());
            }
        }
    }

    None
}
