//! Sequential projection of the filtered records.

use trim_model::{LogRecord, TrimSeries};

/// Projects the filtered records into three aligned sequences, indexed
/// by sample position. No aggregation; purely for sequential-trend
/// views.
pub fn project_series(records: &[LogRecord]) -> TrimSeries {
    let mut series = TrimSeries {
        stft: Vec::with_capacity(records.len()),
        ltft: Vec::with_capacity(records.len()),
        total: Vec::with_capacity(records.len()),
    };
    for record in records {
        series.stft.push(record.stft);
        series.ltft.push(record.ltft);
        series.total.push(record.total_trim());
    }
    series
}
