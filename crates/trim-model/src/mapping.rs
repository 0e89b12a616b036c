//! Source-column to canonical-name mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Rename table from arbitrary source headers to canonical names.
///
/// Built row-wise from the user-supplied mapping table; inserting the
/// same source column twice keeps the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one mapping row. Returns the previous target when the source
    /// column was already mapped (last entry wins).
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(source.into(), target.into())
    }

    /// Canonical (or otherwise renamed) name for a source header, if any.
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Renames a header, passing unmapped headers through unchanged.
    pub fn rename<'a>(&'a self, header: &'a str) -> &'a str {
        self.target_for(header).unwrap_or(header)
    }

    /// Canonical fields that appear as a mapping target.
    pub fn covered_fields(&self) -> impl Iterator<Item = CanonicalField> + '_ {
        CanonicalField::ALL.into_iter().filter(|field| {
            self.entries
                .values()
                .any(|target| target == field.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }
}
