use std::collections::BTreeSet;

use thiserror::Error;

use crate::field::CanonicalField;

/// Errors raised while resolving a source schema onto the canonical one.
///
/// Row-level problems (unparseable numbers, non-positive RPM/MAP) are not
/// errors; those rows are silently excluded by the record filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("mapping table must contain 'original' and 'new' columns")]
    MissingMappingColumns,
    #[error("mapping does not cover required fields: {}", field_list(.0))]
    MissingRequiredFields(BTreeSet<CanonicalField>),
}

fn field_list(fields: &BTreeSet<CanonicalField>) -> String {
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    names.join(", ")
}

pub type Result<T> = std::result::Result<T, SchemaError>;
