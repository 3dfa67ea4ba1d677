//! CSV loading and writing for weather records
//!
//! This module reads a header-plus-rows CSV file entirely into memory and
//! writes filtered records back out with the original column order. No
//! streaming: a run's whole record set lives in memory.

use crate::app::models::{CellValue, Record};
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An in-memory CSV table: the header field order plus all data rows
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Column names from the header row, defining output order
    pub fields: Vec<String>,
    /// All data rows, keyed by column name
    pub records: Vec<Record>,
}

/// Load a CSV file into memory.
///
/// The first row defines the column names. Rows shorter than the header get
/// [`CellValue::Absent`] for their missing trailing cells; cells beyond the
/// header are dropped.
pub fn load_csv(path: &Path) -> Result<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::csv(path.display().to_string(), "failed to open file", Some(e)))?;

    let fields: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv(path.display().to_string(), "failed to read header", Some(e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row
            .map_err(|e| Error::csv(path.display().to_string(), "failed to read record", Some(e)))?;

        let record = Record::from_pairs(fields.iter().enumerate().map(|(i, field)| {
            let value = match row.get(i) {
                Some(cell) => CellValue::Text(cell.to_string()),
                None => CellValue::Absent,
            };
            (field.clone(), value)
        }));
        records.push(record);
    }

    info!(
        "Loaded {} records with {} columns from {}",
        records.len(),
        fields.len(),
        path.display()
    );

    Ok(CsvTable { fields, records })
}

/// Write records to a CSV file, creating parent directories as needed.
///
/// The output header and column order equal `fields`; any record entry whose
/// column is not in `fields` is dropped silently. The file is fully
/// overwritten, never appended.
pub fn write_csv(path: &Path, records: &[Record], fields: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("failed to create output directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| Error::csv(path.display().to_string(), "failed to create file", Some(e)))?;

    writer
        .write_record(fields)
        .map_err(|e| Error::csv(path.display().to_string(), "failed to write header", Some(e)))?;

    for record in records {
        let row: Vec<String> = fields
            .iter()
            .map(|field| record.get(field).map(CellValue::render).unwrap_or_default())
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| Error::csv(path.display().to_string(), "failed to write record", Some(e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush {}", path.display()), e))?;

    debug!("Wrote {} records to {}", records.len(), path.display());

    Ok(())
}
