//! Filtered telemetry observations and signal selection.

use serde::{Deserialize, Serialize};

/// One valid observation from the log.
///
/// Only the record filter constructs these; every field is finite,
/// `map_mbar` and `rpm` are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub map_mbar: f64,
    pub rpm: f64,
    pub stft: f64,
    pub ltft: f64,
}

impl LogRecord {
    /// Combined trim, STFT + LTFT.
    pub fn total_trim(&self) -> f64 {
        self.stft + self.ltft
    }
}

/// Which trim value a record contributes to an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Stft,
    Ltft,
    TotalTrim,
}

impl Signal {
    pub fn value_of(self, record: &LogRecord) -> f64 {
        match self {
            Self::Stft => record.stft,
            Self::Ltft => record.ltft,
            Self::TotalTrim => record.total_trim(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stft => "STFT",
            Self::Ltft => "LTFT",
            Self::TotalTrim => "STFT+LTFT",
        }
    }
}

/// Sequential projection of the filtered records, aligned by sample
/// index (ordinal position after filtering; the source has no time
/// column).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrimSeries {
    pub stft: Vec<f64>,
    pub ltft: Vec<f64>,
    pub total: Vec<f64>,
}

impl TrimSeries {
    pub fn len(&self) -> usize {
        self.stft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stft.is_empty()
    }
}
