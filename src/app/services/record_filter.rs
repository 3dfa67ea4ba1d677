//! Threshold filtering for weather records
//!
//! Applies value coercion and an inclusive minimum-temperature comparison to
//! every record, producing the kept records plus run statistics.

use crate::app::models::{FilterResult, FilterStats, Record};
use tracing::{debug, info};

/// Filter records by an inclusive minimum temperature.
///
/// For each record, in input order:
/// - a record without the `temp_field` column at all is skipped and counted
///   as missing;
/// - a record whose value does not coerce to a number is skipped and counted
///   as bad;
/// - a record with a coerced value `>= temp_min` is kept unchanged, all
///   original columns intact;
/// - anything below the threshold is dropped silently, with no counter
///   beyond not being written.
///
/// # Arguments
///
/// * `records` - Input records to filter
/// * `temp_field` - Name of the temperature column
/// * `temp_min` - Inclusive minimum threshold
///
/// # Returns
///
/// The kept records, in input order, together with [`FilterStats`]
pub fn filter_records(records: Vec<Record>, temp_field: &str, temp_min: f64) -> FilterResult {
    let mut stats = FilterStats {
        read: records.len(),
        ..FilterStats::new()
    };
    let mut kept = Vec::new();

    for record in records {
        if !record.contains_field(temp_field) {
            stats.skipped_missing_temp += 1;
            continue;
        }

        let temperature = match record.get(temp_field).and_then(|value| value.as_number()) {
            Some(t) => t,
            None => {
                debug!("Skipping record with unparseable '{}' value", temp_field);
                stats.skipped_bad_temp += 1;
                continue;
            }
        };

        if temperature >= temp_min {
            kept.push(record);
        }
    }

    stats.written = kept.len();

    info!(
        "Filtering complete: {} -> {} records ({})",
        stats.read,
        stats.written,
        stats.summary()
    );

    FilterResult {
        records: kept,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::CellValue;

    fn record(station: &str, temp: &str) -> Record {
        Record::from_pairs([
            ("station".to_string(), CellValue::Text(station.to_string())),
            ("temp".to_string(), CellValue::Text(temp.to_string())),
            ("date".to_string(), CellValue::Text("d1".to_string())),
        ])
    }

    #[test]
    fn test_keeps_rows_at_or_above_threshold() {
        let records = vec![record("A", "5.0"), record("B", "-2"), record("C", "abc")];
        let result = filter_records(records, "temp", 0.0);

        assert_eq!(result.records.len(), 1);
        assert_eq!(
            result.records[0].get("station"),
            Some(&CellValue::Text("A".to_string()))
        );
        assert_eq!(result.stats.read, 3);
        assert_eq!(result.stats.written, 1);
        assert_eq!(result.stats.skipped_missing_temp, 0);
        // B is numeric but below threshold: filtered out, not counted as bad
        assert_eq!(result.stats.skipped_bad_temp, 1);
        assert_eq!(result.stats.below_threshold(), 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let records = vec![record("A", "0.0"), record("B", "-0.1")];
        let result = filter_records(records, "temp", 0.0);

        assert_eq!(result.stats.written, 1);
        assert_eq!(
            result.records[0].get("station"),
            Some(&CellValue::Text("A".to_string()))
        );
    }

    #[test]
    fn test_empty_value_counts_as_bad() {
        let records = vec![Record::from_pairs([
            ("station".to_string(), CellValue::Text("X".to_string())),
            ("tmax".to_string(), CellValue::Text(String::new())),
        ])];
        let result = filter_records(records, "tmax", 10.0);

        assert_eq!(result.stats.read, 1);
        assert_eq!(result.stats.written, 0);
        assert_eq!(result.stats.skipped_bad_temp, 1);
    }

    #[test]
    fn test_missing_column_counts_as_missing() {
        let records = vec![record("A", "5.0"), record("B", "6.0")];
        let result = filter_records(records, "humidity", 0.0);

        assert_eq!(result.stats.read, 2);
        assert_eq!(result.stats.written, 0);
        assert_eq!(result.stats.skipped_missing_temp, 2);
        assert_eq!(result.stats.skipped_bad_temp, 0);
    }

    #[test]
    fn test_counters_sum_to_read() {
        let records = vec![
            record("A", "5.0"),  // kept
            record("B", "-2"),   // below threshold
            record("C", "abc"),  // bad
            record("D", ""),     // bad (empty)
            record("E", "12.5"), // kept
        ];
        let result = filter_records(records, "temp", 0.0);
        let stats = &result.stats;

        assert_eq!(
            stats.read,
            stats.written
                + stats.skipped_missing_temp
                + stats.skipped_bad_temp
                + stats.below_threshold()
        );
    }

    #[test]
    fn test_preserves_input_order_and_all_columns() {
        let records = vec![record("A", "1.0"), record("B", "-5"), record("C", "2.0")];
        let result = filter_records(records, "temp", 0.0);

        let stations: Vec<_> = result
            .records
            .iter()
            .map(|r| r.get("station").unwrap().render())
            .collect();
        assert_eq!(stations, vec!["A", "C"]);

        // Columns beyond the temperature field survive verbatim
        assert_eq!(
            result.records[0].get("date"),
            Some(&CellValue::Text("d1".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        let result = filter_records(Vec::new(), "temp", 0.0);
        assert_eq!(result.stats, FilterStats::new());
        assert!(result.records.is_empty());
    }
}
