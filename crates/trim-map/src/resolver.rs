use std::collections::BTreeSet;

use tracing::debug;

use trim_model::{CanonicalField, ColumnMapping, RawTable, Result, SchemaError};

const ORIGINAL_COLUMN: &str = "original";
const NEW_COLUMN: &str = "new";

/// Builds a [`ColumnMapping`] from the user-supplied mapping table.
///
/// The table must carry `original` and `new` columns. Rows with an empty
/// `original` cell are skipped; when the same source column appears in
/// several rows, the last row wins.
pub fn resolve_mapping(mapping_table: &RawTable) -> Result<ColumnMapping> {
    let original_idx = mapping_table
        .column_index(ORIGINAL_COLUMN)
        .ok_or(SchemaError::MissingMappingColumns)?;
    let new_idx = mapping_table
        .column_index(NEW_COLUMN)
        .ok_or(SchemaError::MissingMappingColumns)?;

    let mut mapping = ColumnMapping::new();
    for row in 0..mapping_table.row_count() {
        let source = mapping_table.cell(row, original_idx).unwrap_or("");
        if source.is_empty() {
            continue;
        }
        let target = mapping_table.cell(row, new_idx).unwrap_or("");
        if let Some(previous) = mapping.insert(source, target) {
            debug!(source, previous = %previous, target, "mapping row overrides earlier entry");
        }
    }
    Ok(mapping)
}

/// Checks every canonical field appears as a mapping target.
pub fn validate_required(mapping: &ColumnMapping) -> Result<()> {
    let covered: BTreeSet<CanonicalField> = mapping.covered_fields().collect();
    let missing: BTreeSet<CanonicalField> = CanonicalField::ALL
        .into_iter()
        .filter(|field| !covered.contains(field))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingRequiredFields(missing))
    }
}

/// Applies the mapping to the log table's header row. Headers without a
/// mapping entry pass through unchanged.
pub fn rename_headers(headers: &[String], mapping: &ColumnMapping) -> Vec<String> {
    headers
        .iter()
        .map(|header| mapping.rename(header).to_string())
        .collect()
}
