//! One-pass orchestration: resolve, filter, aggregate, mask, project.

use tracing::{info, info_span};

use trim_map::{rename_headers, resolve_mapping, validate_required};
use trim_model::{
    Grid, HeatmapOptions, HeatmapReport, RawTable, Result, RunStats, Signal, SignalReport,
    TrimSeries, ValidityMask, ViewMode,
};

use crate::binning::aggregate;
use crate::filter::filter_records;
use crate::mask::{build_mask, combine_masks};
use crate::series::project_series;

/// Value grid and validity mask for one displayed signal.
#[derive(Debug, Clone)]
pub struct SignalView {
    pub signal: Signal,
    pub grid: Grid,
    pub mask: ValidityMask,
}

/// Everything one invocation computes. Owned by the caller, discarded
/// after rendering; nothing survives into the next run.
#[derive(Debug, Clone)]
pub struct HeatmapRun {
    pub options: HeatmapOptions,
    pub views: Vec<SignalView>,
    /// Sample counts per cell, shared across the displayed signals
    /// (they aggregate the same filtered records).
    pub counts: Grid,
    /// OR of the per-signal masks; only present in side-by-side mode,
    /// where it gates the shared sample-count view.
    pub combined_mask: Option<ValidityMask>,
    pub series: Option<TrimSeries>,
    pub stats: RunStats,
}

impl HeatmapRun {
    /// Flattens the run into the serializable report shape.
    pub fn to_report(&self) -> HeatmapReport {
        HeatmapReport {
            mode: self.options.mode,
            bins: self.options.bins,
            thresholds: self.options.thresholds,
            signals: self
                .views
                .iter()
                .map(|view| SignalReport::new(view.signal, &view.grid, &view.mask))
                .collect(),
            combined_valid: self
                .combined_mask
                .as_ref()
                .map(|mask| mask.valid_keys()),
            series: self.series.clone(),
            stats: self.stats,
        }
    }
}

fn signals_for_mode(mode: ViewMode) -> Vec<Signal> {
    match mode {
        ViewMode::Stft => vec![Signal::Stft],
        ViewMode::Ltft => vec![Signal::Ltft],
        ViewMode::Combined => vec![Signal::TotalTrim],
        ViewMode::SideBySide => vec![Signal::Stft, Signal::Ltft],
    }
}

/// Runs the full computation for one log + mapping table pair.
///
/// Fails only on schema problems (mapping table structure, uncovered
/// required fields); invalid rows are excluded silently and an empty
/// filtered set flows through to empty grids and masks.
pub fn run_pipeline(
    log: &RawTable,
    mapping_table: &RawTable,
    options: &HeatmapOptions,
) -> Result<HeatmapRun> {
    let span = info_span!("heatmap", mode = ?options.mode);
    let _guard = span.enter();

    let mapping = resolve_mapping(mapping_table)?;
    validate_required(&mapping)?;
    let renamed = RawTable::new(rename_headers(&log.headers, &mapping), log.rows.clone());

    let records = filter_records(&renamed);
    let stats = RunStats {
        rows_read: log.row_count(),
        rows_dropped: log.row_count() - records.len(),
        records: records.len(),
    };
    info!(
        rows = stats.rows_read,
        dropped = stats.rows_dropped,
        records = stats.records,
        "filtered log table"
    );

    let mut views = Vec::new();
    for signal in signals_for_mode(options.mode) {
        let grid = aggregate(&records, options.bins, signal);
        let mask = build_mask(&grid, &grid, &options.thresholds);
        info!(
            signal = signal.label(),
            cells = grid.len(),
            valid = mask.valid_count(),
            "aggregated signal"
        );
        views.push(SignalView { signal, grid, mask });
    }

    // Counts are identical across signals, so the first view's grid
    // doubles as the shared sample-count source.
    let counts = views
        .first()
        .map(|view| view.grid.clone())
        .unwrap_or_default();

    let combined_mask = match options.mode {
        ViewMode::SideBySide => Some(combine_masks(&views[0].mask, &views[1].mask)),
        _ => None,
    };

    let series = options.include_series.then(|| project_series(&records));

    Ok(HeatmapRun {
        options: *options,
        views,
        counts,
        combined_mask,
        series,
        stats,
    })
}
