pub mod error;
pub mod field;
pub mod grid;
pub mod mapping;
pub mod options;
pub mod record;
pub mod report;
pub mod table;

pub use error::{Result, SchemaError};
pub use field::CanonicalField;
pub use grid::{BinKey, Cell, Grid, ValidityMask};
pub use mapping::ColumnMapping;
pub use options::{
    BinOptions, HeatmapOptions, MapBinSize, RpmBinSize, ThresholdOptions, ViewMode,
};
pub use record::{LogRecord, Signal, TrimSeries};
pub use report::{GridCellEntry, HeatmapReport, RunStats, SignalReport};
pub use table::RawTable;
