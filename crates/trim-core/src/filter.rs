//! Row filtering: renamed raw rows to typed records.

use tracing::debug;

use trim_model::{CanonicalField, LogRecord, RawTable};

/// Extracts valid [`LogRecord`]s from a renamed table, preserving row
/// order.
///
/// A row is dropped, never erroring, when any required field is empty or
/// unparseable as a finite number, or when MAP or RPM is not strictly
/// positive. A missing canonical column drops every row for the same
/// reason. Noisy logs are the expected common case.
pub fn filter_records(table: &RawTable) -> Vec<LogRecord> {
    let Some(indices) = field_indices(table) else {
        debug!("renamed table lacks one or more canonical columns; no records");
        return Vec::new();
    };
    let [map_idx, rpm_idx, stft_idx, ltft_idx] = indices;

    let mut records = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let Some(map_mbar) = parse_cell(table, row, map_idx) else {
            continue;
        };
        let Some(rpm) = parse_cell(table, row, rpm_idx) else {
            continue;
        };
        let Some(stft) = parse_cell(table, row, stft_idx) else {
            continue;
        };
        let Some(ltft) = parse_cell(table, row, ltft_idx) else {
            continue;
        };
        if map_mbar <= 0.0 || rpm <= 0.0 {
            continue;
        }
        records.push(LogRecord {
            map_mbar,
            rpm,
            stft,
            ltft,
        });
    }
    debug!(
        rows = table.row_count(),
        records = records.len(),
        dropped = table.row_count() - records.len(),
        "filtered log rows"
    );
    records
}

/// First matching column index per canonical field, in `ALL` order.
fn field_indices(table: &RawTable) -> Option<[usize; 4]> {
    let mut indices = [0usize; 4];
    for (slot, field) in CanonicalField::ALL.into_iter().enumerate() {
        indices[slot] = table.column_index(field.as_str())?;
    }
    Some(indices)
}

fn parse_cell(table: &RawTable, row: usize, column: usize) -> Option<f64> {
    let value = table.cell(row, column)?.trim();
    if value.is_empty() {
        return None;
    }
    let parsed: f64 = value.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[&str; 4]]) -> RawTable {
        RawTable::new(
            vec![
                "MAP_mbar".to_string(),
                "RPM".to_string(),
                "STFT".to_string(),
                "LTFT".to_string(),
            ],
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn keeps_valid_rows_in_order() {
        let table = table(&[
            ["950", "1000", "2.0", "1.0"],
            ["1010", "2500", "-1.5", "0.5"],
        ]);
        let records = filter_records(&table);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rpm, 1000.0);
        assert_eq!(records[1].rpm, 2500.0);
    }

    #[test]
    fn drops_unparseable_and_empty_fields() {
        let table = table(&[
            ["950", "1000", "2.0", "1.0"],
            ["950", "abc", "2.0", "1.0"],
            ["950", "", "2.0", "1.0"],
            ["950", "1000", "NaN", "1.0"],
            ["950", "inf", "2.0", "1.0"],
        ]);
        assert_eq!(filter_records(&table).len(), 1);
    }

    #[test]
    fn drops_non_positive_map_and_rpm() {
        let table = table(&[
            ["950", "-5", "2.0", "1.0"],
            ["0", "1000", "2.0", "1.0"],
            ["-10", "1000", "2.0", "1.0"],
            ["950", "0", "2.0", "1.0"],
        ]);
        assert!(filter_records(&table).is_empty());
    }

    #[test]
    fn negative_trim_values_are_kept() {
        let table = table(&[["950", "1000", "-9.4", "-3.1"]]);
        let records = filter_records(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stft, -9.4);
    }

    #[test]
    fn missing_canonical_column_yields_no_records() {
        let table = RawTable::new(
            vec!["MAP_mbar".to_string(), "RPM".to_string()],
            vec![vec!["950".to_string(), "1000".to_string()]],
        );
        assert!(filter_records(&table).is_empty());
    }

    #[test]
    fn empty_table_yields_no_records() {
        let table = table(&[]);
        assert!(filter_records(&table).is_empty());
    }
}
