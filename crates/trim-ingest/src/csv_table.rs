use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use trim_model::RawTable;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into a [`RawTable`].
///
/// The first non-empty row is the header. Headers and cells are trimmed
/// and BOM-stripped, fully-empty rows are skipped, and short rows are
/// padded with empty cells to the header width.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open csv: {}", path.display()))?;
    read_raw_table_from_reader(file).with_context(|| format!("read csv: {}", path.display()))
}

pub fn read_raw_table_from_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("read record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable::default());
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    debug!(columns = headers.len(), rows = rows.len(), "loaded csv table");
    Ok(RawTable::new(headers, rows))
}
