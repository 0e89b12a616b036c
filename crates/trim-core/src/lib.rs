//! Core computation: record filtering, grid aggregation, validity
//! masking, and the single-pass pipeline tying them together.
//!
//! Everything here is a pure, synchronous function over in-memory data.
//! Re-running with identical inputs and configuration yields identical
//! grids and masks; nothing is cached across invocations.

pub mod binning;
pub mod filter;
pub mod mask;
pub mod pipeline;
pub mod series;

pub use binning::{aggregate, bin_value};
pub use filter::filter_records;
pub use mask::{build_mask, combine_masks};
pub use pipeline::{HeatmapRun, SignalView, run_pipeline};
pub use series::project_series;
