//! Floor-division binning and per-cell aggregation.

use std::collections::BTreeMap;

use trim_model::{BinKey, BinOptions, Cell, Grid, LogRecord, Signal};

/// Lower edge of the bin containing `value`.
///
/// Floor semantics: a value exactly on a bin boundary belongs to that
/// bin, not the one below. `bin_value(500.0, 500) == 500`,
/// `bin_value(499.9, 500) == 0`.
///
/// The edge is computed in `f64` and only then cast, so magnitudes
/// beyond the `i64` range saturate instead of overflowing. The filter
/// admits any finite positive value, including ones that large.
pub fn bin_value(value: f64, size: u32) -> i64 {
    ((value / f64::from(size)).floor() * f64::from(size)) as i64
}

/// Grid cell for one record under the given bin widths.
pub fn bin_key(record: &LogRecord, bins: BinOptions) -> BinKey {
    BinKey::new(
        bin_value(record.rpm, bins.rpm_bin_size.width()),
        bin_value(record.map_mbar, bins.map_bin_size.width()),
    )
}

/// Buckets records into a sparse grid and computes the per-cell mean of
/// the chosen signal.
///
/// Cells only exist where at least one record landed; zero records in,
/// empty grid out. Each call is independent, so aggregating several
/// signals over the same records shares no state.
pub fn aggregate(records: &[LogRecord], bins: BinOptions, signal: Signal) -> Grid {
    let mut sums: BTreeMap<BinKey, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(bin_key(record, bins)).or_insert((0.0, 0));
        entry.0 += signal.value_of(record);
        entry.1 += 1;
    }
    let mut grid = Grid::new();
    for (key, (sum, count)) in sums {
        grid.insert(
            key,
            Cell {
                mean: sum / count as f64,
                count,
            },
        );
    }
    grid
}
