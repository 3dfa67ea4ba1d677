//! Data models for weather filtering
//!
//! This module contains the core data structures: loosely-typed cell values,
//! records keyed by column name, and per-run filtering statistics.

use std::collections::HashMap;

/// A raw cell value from a loosely-typed tabular source.
///
/// CSV reads always produce [`CellValue::Text`]; [`CellValue::Absent`] fills
/// cells that a short row did not provide. [`CellValue::Number`] carries
/// values that arrive already numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value present for this cell
    Absent,
    /// An already-numeric value
    Number(f64),
    /// Raw text as read from the source
    Text(String),
}

impl CellValue {
    /// Coerce this cell to a numeric value.
    ///
    /// - `Absent` yields nothing.
    /// - `Number` yields its value.
    /// - `Text` is trimmed; empty text yields nothing, otherwise a standard
    ///   decimal/scientific parse is attempted and failure yields nothing.
    ///
    /// Absence of a result is the only failure signal; this never errors.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Absent => None,
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }

    /// Render this cell for CSV output.
    ///
    /// Absent cells render as the empty string, matching how they were read.
    pub fn render(&self) -> String {
        match self {
            CellValue::Absent => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// One data row, mapped by column name.
///
/// The column set is taken from the file header and is identical across all
/// records in a run. Records are immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: HashMap<String, CellValue>,
}

impl Record {
    /// Create a record from (column name, value) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, CellValue)>) -> Self {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    /// Check whether the record's column mapping contains `field` at all
    pub fn contains_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Get the value for `field`, if the column is present
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.values.get(field)
    }

    /// Iterate over the record's column names
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Statistics for a single filtering run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStats {
    /// Total number of input records
    pub read: usize,
    /// Number of records written to the output
    pub written: usize,
    /// Records skipped because the temperature column was absent
    pub skipped_missing_temp: usize,
    /// Records skipped because the temperature value was unparseable or empty
    pub skipped_bad_temp: usize,
}

impl FilterStats {
    /// Create new empty filtering statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics for a copy-only run that wrote every input record
    pub fn passthrough(record_count: usize) -> Self {
        Self {
            read: record_count,
            written: record_count,
            skipped_missing_temp: 0,
            skipped_bad_temp: 0,
        }
    }

    /// Records dropped because their temperature was below the threshold.
    ///
    /// Not counted as skipped; derived from the other counters.
    pub fn below_threshold(&self) -> usize {
        self.read - self.written - self.skipped_missing_temp - self.skipped_bad_temp
    }

    /// Get summary of filtering statistics for logging
    pub fn summary(&self) -> String {
        format!(
            "read={} written={} skip_missing_temp={} skip_bad_temp={}",
            self.read, self.written, self.skipped_missing_temp, self.skipped_bad_temp
        )
    }
}

/// Result of a filtering pass
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// Records that met the threshold, in input order
    pub records: Vec<Record>,
    /// Filtering statistics
    pub stats: FilterStats,
}
