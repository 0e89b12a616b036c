//! Sparse 2D grids keyed by (RPM bin, MAP bin).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifies one grid cell: the lower edge of its RPM and MAP bins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BinKey {
    pub rpm_bin: i64,
    pub map_bin: i64,
}

impl BinKey {
    pub fn new(rpm_bin: i64, map_bin: i64) -> Self {
        Self { rpm_bin, map_bin }
    }
}

/// Aggregate over the records sharing a bin key for one signal.
///
/// A cell only exists when at least one record landed in it; empty cells
/// are absent from the grid, never stored with a count of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub mean: f64,
    pub count: usize,
}

/// Sparse mapping from bin key to aggregated cell.
///
/// Backed by a `BTreeMap` so iteration, rendering, and serialization are
/// deterministic across runs with identical input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: BTreeMap<BinKey, Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: BinKey, cell: Cell) {
        self.cells.insert(key, cell);
    }

    pub fn get(&self, key: &BinKey) -> Option<&Cell> {
        self.cells.get(key)
    }

    pub fn contains(&self, key: &BinKey) -> bool {
        self.cells.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BinKey, &Cell)> {
        self.cells.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &BinKey> {
        self.cells.keys()
    }

    /// Sorted distinct RPM bin edges, for rectangular rendering.
    pub fn rpm_bins(&self) -> Vec<i64> {
        let mut bins: Vec<i64> = self.cells.keys().map(|key| key.rpm_bin).collect();
        bins.sort_unstable();
        bins.dedup();
        bins
    }

    /// Sorted distinct MAP bin edges.
    pub fn map_bins(&self) -> Vec<i64> {
        let mut bins: Vec<i64> = self.cells.keys().map(|key| key.map_bin).collect();
        bins.sort_unstable();
        bins.dedup();
        bins
    }
}

/// Boolean grid marking which cells pass the confidence and range
/// thresholds. Keys absent from the mask read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityMask {
    valid: BTreeMap<BinKey, bool>,
}

impl ValidityMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: BinKey, valid: bool) {
        self.valid.insert(key, valid);
    }

    pub fn is_valid(&self, key: &BinKey) -> bool {
        self.valid.get(key).copied().unwrap_or(false)
    }

    /// Whether the mask carries an entry for `key` at all, valid or not.
    pub fn contains_key(&self, key: &BinKey) -> bool {
        self.valid.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BinKey, bool)> {
        self.valid.iter().map(|(key, valid)| (key, *valid))
    }

    pub fn keys(&self) -> impl Iterator<Item = &BinKey> {
        self.valid.keys()
    }

    /// Keys marked valid, in key order.
    pub fn valid_keys(&self) -> Vec<BinKey> {
        self.valid
            .iter()
            .filter(|(_, valid)| **valid)
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn valid_count(&self) -> usize {
        self.valid.values().filter(|valid| **valid).count()
    }
}
