//! Configuration for binning, thresholds, and the selected view.

use serde::{Deserialize, Serialize};

/// Permitted RPM bin widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RpmBinSize {
    Rpm250,
    #[default]
    Rpm500,
    Rpm1000,
}

impl RpmBinSize {
    pub fn width(self) -> u32 {
        match self {
            Self::Rpm250 => 250,
            Self::Rpm500 => 500,
            Self::Rpm1000 => 1000,
        }
    }
}

/// Permitted MAP bin widths, in mbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapBinSize {
    Map25,
    #[default]
    Map50,
    Map100,
}

impl MapBinSize {
    pub fn width(self) -> u32 {
        match self {
            Self::Map25 => 25,
            Self::Map50 => 50,
            Self::Map100 => 100,
        }
    }
}

/// Bin widths for one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BinOptions {
    pub rpm_bin_size: RpmBinSize,
    pub map_bin_size: MapBinSize,
}

/// Confidence and range thresholds gating which cells are shown.
///
/// `min_samples` is expected in 1..=50 and the trim range within
/// [-50, 50]; the CLI enforces those bounds at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOptions {
    pub min_samples: u32,
    pub trim_min: f64,
    pub trim_max: f64,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            min_samples: 1,
            trim_min: -50.0,
            trim_max: 50.0,
        }
    }
}

/// Full configuration for one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapOptions {
    pub bins: BinOptions,
    pub thresholds: ThresholdOptions,
    pub mode: ViewMode,
    /// Whether to project the sequential trim series alongside the grids.
    pub include_series: bool,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            bins: BinOptions::default(),
            thresholds: ThresholdOptions::default(),
            mode: ViewMode::default(),
            include_series: true,
        }
    }
}

/// Which heatmap view the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Short-term fuel trim only.
    #[default]
    Stft,
    /// Long-term fuel trim only.
    Ltft,
    /// Combined STFT + LTFT trim.
    Combined,
    /// STFT and LTFT as two grids with a shared sample-count overlay.
    SideBySide,
}
