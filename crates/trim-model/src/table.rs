//! In-memory representation of a raw CSV table.

/// A loaded table with arbitrary column headers.
///
/// Rows are padded to the header width by the ingest layer, so a cell
/// lookup by column index never goes out of bounds.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the first column with the given header, scanning left to
    /// right. When renaming maps two source columns onto the same
    /// canonical name, the leftmost one is the one read downstream.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_prefers_leftmost_duplicate() {
        let table = RawTable::new(
            vec!["RPM".to_string(), "RPM".to_string()],
            vec![vec!["1000".to_string(), "2000".to_string()]],
        );
        assert_eq!(table.column_index("RPM"), Some(0));
        assert_eq!(table.cell(0, 0), Some("1000"));
    }
}
