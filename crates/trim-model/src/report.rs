//! Serializable run output for downstream presentation layers.

use serde::{Deserialize, Serialize};

use crate::grid::{BinKey, Grid, ValidityMask};
use crate::options::{BinOptions, ThresholdOptions, ViewMode};
use crate::record::{Signal, TrimSeries};

/// One grid cell flattened for interchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCellEntry {
    pub rpm_bin: i64,
    pub map_bin: i64,
    pub mean: f64,
    pub count: usize,
}

impl GridCellEntry {
    pub fn from_grid(grid: &Grid) -> Vec<Self> {
        grid.iter()
            .map(|(key, cell)| Self {
                rpm_bin: key.rpm_bin,
                map_bin: key.map_bin,
                mean: cell.mean,
                count: cell.count,
            })
            .collect()
    }
}

/// Grid and mask for one aggregated signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    pub signal: Signal,
    pub cells: Vec<GridCellEntry>,
    pub valid_cells: Vec<BinKey>,
}

impl SignalReport {
    pub fn new(signal: Signal, grid: &Grid, mask: &ValidityMask) -> Self {
        Self {
            signal,
            cells: GridCellEntry::from_grid(grid),
            valid_cells: mask.valid_keys(),
        }
    }
}

/// Stage counters for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Data rows in the log table before filtering.
    pub rows_read: usize,
    /// Rows excluded for missing/invalid required fields.
    pub rows_dropped: usize,
    /// Valid records that reached aggregation.
    pub records: usize,
}

/// Full output of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapReport {
    pub mode: ViewMode,
    pub bins: BinOptions,
    pub thresholds: ThresholdOptions,
    pub signals: Vec<SignalReport>,
    /// OR of the per-signal masks; present only in side-by-side mode
    /// where it gates the shared sample-count view.
    pub combined_valid: Option<Vec<BinKey>>,
    pub series: Option<TrimSeries>,
    pub stats: RunStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn report_serializes_round_trip() {
        let mut grid = Grid::new();
        grid.insert(BinKey::new(1000, 500), Cell { mean: 3.0, count: 5 });
        let mut mask = ValidityMask::new();
        mask.set(BinKey::new(1000, 500), true);
        let report = HeatmapReport {
            mode: ViewMode::Combined,
            bins: BinOptions::default(),
            thresholds: ThresholdOptions::default(),
            signals: vec![SignalReport::new(Signal::TotalTrim, &grid, &mask)],
            combined_valid: None,
            series: Some(TrimSeries {
                stft: vec![2.0],
                ltft: vec![1.0],
                total: vec![3.0],
            }),
            stats: RunStats {
                rows_read: 6,
                rows_dropped: 1,
                records: 5,
            },
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: HeatmapReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
        assert_eq!(round.signals[0].cells.len(), 1);
        assert_eq!(round.signals[0].valid_cells, vec![BinKey::new(1000, 500)]);
    }
}
