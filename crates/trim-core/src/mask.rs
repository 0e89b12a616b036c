//! Validity masking and overlay combination.

use trim_model::{Grid, ThresholdOptions, ValidityMask};

/// Marks which cells of `values` pass the confidence and range gates.
///
/// A key is valid iff it exists in the value grid, its sample count in
/// `counts` is at least `min_samples`, and its mean lies within
/// `[trim_min, trim_max]` inclusive. `counts` may be a different
/// signal's grid when the counts are identical by construction (STFT and
/// LTFT aggregate the same records). Keys absent from the value grid are
/// simply absent from the mask and therefore read as invalid.
pub fn build_mask(values: &Grid, counts: &Grid, thresholds: &ThresholdOptions) -> ValidityMask {
    let mut mask = ValidityMask::new();
    for (key, cell) in values.iter() {
        let count = counts.get(key).map_or(0, |counted| counted.count);
        let valid = count >= thresholds.min_samples as usize
            && cell.mean >= thresholds.trim_min
            && cell.mean <= thresholds.trim_max;
        mask.set(*key, valid);
    }
    mask
}

/// Per-key logical OR over the union of both masks' keys.
///
/// Used for the shared sample-count overlay in side-by-side mode: a cell
/// is shown when it is valid for either displayed signal.
pub fn combine_masks(left: &ValidityMask, right: &ValidityMask) -> ValidityMask {
    let mut combined = ValidityMask::new();
    for (key, valid) in left.iter() {
        combined.set(*key, valid || right.is_valid(key));
    }
    for (key, valid) in right.iter() {
        if !left.contains_key(key) {
            combined.set(*key, valid);
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use trim_model::{BinKey, Cell};

    fn grid(entries: &[(i64, i64, f64, usize)]) -> Grid {
        let mut grid = Grid::new();
        for (rpm_bin, map_bin, mean, count) in entries {
            grid.insert(
                BinKey::new(*rpm_bin, *map_bin),
                Cell {
                    mean: *mean,
                    count: *count,
                },
            );
        }
        grid
    }

    #[test]
    fn gates_on_count_and_range() {
        let values = grid(&[
            (1000, 500, 3.0, 5),
            (1500, 500, 60.0, 5),
            (2000, 500, -2.0, 1),
        ]);
        let thresholds = ThresholdOptions {
            min_samples: 2,
            trim_min: -50.0,
            trim_max: 50.0,
        };
        let mask = build_mask(&values, &values, &thresholds);
        assert!(mask.is_valid(&BinKey::new(1000, 500)));
        // Mean out of range.
        assert!(!mask.is_valid(&BinKey::new(1500, 500)));
        // Count below threshold.
        assert!(!mask.is_valid(&BinKey::new(2000, 500)));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let values = grid(&[(1000, 500, -50.0, 1), (1500, 500, 50.0, 1)]);
        let mask = build_mask(&values, &values, &ThresholdOptions::default());
        assert!(mask.is_valid(&BinKey::new(1000, 500)));
        assert!(mask.is_valid(&BinKey::new(1500, 500)));
    }

    #[test]
    fn counts_can_come_from_a_parallel_grid() {
        let values = grid(&[(1000, 500, 3.0, 5)]);
        let counts = grid(&[(1000, 500, -1.0, 1)]);
        let thresholds = ThresholdOptions {
            min_samples: 2,
            ..ThresholdOptions::default()
        };
        let mask = build_mask(&values, &counts, &thresholds);
        assert!(!mask.is_valid(&BinKey::new(1000, 500)));
    }

    #[test]
    fn absent_keys_are_invalid_not_errors() {
        let mask = build_mask(&Grid::new(), &Grid::new(), &ThresholdOptions::default());
        assert!(!mask.is_valid(&BinKey::new(7000, 1200)));
        assert_eq!(mask.valid_count(), 0);
    }

    #[test]
    fn combine_is_or_over_the_key_union() {
        let thresholds = ThresholdOptions::default();
        let left_values = grid(&[(1000, 500, 3.0, 5), (1500, 500, 99.0, 5)]);
        let right_values = grid(&[(1500, 500, 1.0, 5), (2000, 500, 99.0, 5)]);
        let left = build_mask(&left_values, &left_values, &thresholds);
        let right = build_mask(&right_values, &right_values, &thresholds);
        let combined = combine_masks(&left, &right);
        // Valid on the left only.
        assert!(combined.is_valid(&BinKey::new(1000, 500)));
        // Invalid on the left, valid on the right.
        assert!(combined.is_valid(&BinKey::new(1500, 500)));
        // Present on the right only, invalid there.
        assert!(!combined.is_valid(&BinKey::new(2000, 500)));
        assert_eq!(combined.keys().count(), 3);
    }
}
