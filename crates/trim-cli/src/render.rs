//! Terminal rendering of grids, counts, and the series summary.
//!
//! Masked-out cells render blank, exactly like the heatmap hides them:
//! "insufficient/out-of-range data" is not an error state.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell as TableCell, CellAlignment, Table};

use trim_model::{BinKey, Grid, TrimSeries, ValidityMask};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn header_cell(text: impl ToString) -> TableCell {
    TableCell::new(text).add_attribute(Attribute::Bold)
}

fn number_cell(text: String) -> TableCell {
    TableCell::new(text).set_alignment(CellAlignment::Right)
}

/// Grid of mean trim values, one decimal place, masked cells blank.
///
/// RPM bins run left to right, MAP bins top-down from the highest, the
/// same orientation the interactive heatmap uses.
pub fn value_grid_table(grid: &Grid, mask: &ValidityMask) -> Table {
    grid_table(grid, mask, |cell| format!("{:.1}", cell.mean))
}

/// Grid of per-cell sample counts, masked cells blank.
pub fn count_grid_table(counts: &Grid, mask: &ValidityMask) -> Table {
    grid_table(counts, mask, |cell| cell.count.to_string())
}

fn grid_table(
    grid: &Grid,
    mask: &ValidityMask,
    format_cell: impl Fn(&trim_model::Cell) -> String,
) -> Table {
    let rpm_bins = grid.rpm_bins();
    let map_bins = grid.map_bins();

    let mut table = Table::new();
    apply_table_style(&mut table);
    let mut header = vec![header_cell("MAP \\ RPM")];
    header.extend(rpm_bins.iter().map(header_cell));
    table.set_header(header);

    for map_bin in map_bins.iter().rev() {
        let mut row = vec![header_cell(map_bin)];
        for rpm_bin in &rpm_bins {
            let key = BinKey::new(*rpm_bin, *map_bin);
            let text = match grid.get(&key) {
                Some(cell) if mask.is_valid(&key) => format_cell(cell),
                _ => String::new(),
            };
            row.push(number_cell(text));
        }
        table.add_row(row);
    }
    table
}

/// Per-signal summary of the sequential trim series.
pub fn series_table(series: &TrimSeries) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Signal"),
        header_cell("Samples"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    for (label, values) in [
        ("STFT", &series.stft),
        ("LTFT", &series.ltft),
        ("STFT+LTFT", &series.total),
    ] {
        let mut row = vec![TableCell::new(label), number_cell(values.len().to_string())];
        match summarize(values) {
            Some((mean, min, max)) => {
                row.push(number_cell(format!("{mean:.2}")));
                row.push(number_cell(format!("{min:.2}")));
                row.push(number_cell(format!("{max:.2}")));
            }
            None => {
                row.extend(std::iter::repeat_with(|| number_cell("-".to_string())).take(3));
            }
        }
        table.add_row(row);
    }
    table
}

fn summarize(values: &[f64]) -> Option<(f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for value in values {
        min = min.min(*value);
        max = max.max(*value);
        sum += value;
    }
    Some((sum / values.len() as f64, min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trim_model::Cell;

    fn sample_grid() -> (Grid, ValidityMask) {
        let mut grid = Grid::new();
        grid.insert(BinKey::new(1000, 500), Cell { mean: 3.04, count: 5 });
        grid.insert(BinKey::new(1500, 550), Cell { mean: -1.2, count: 1 });
        let mut mask = ValidityMask::new();
        mask.set(BinKey::new(1000, 500), true);
        mask.set(BinKey::new(1500, 550), false);
        (grid, mask)
    }

    #[test]
    fn value_table_formats_valid_cells_and_blanks_masked_ones() {
        let (grid, mask) = sample_grid();
        let rendered = value_grid_table(&grid, &mask).to_string();
        assert!(rendered.contains("3.0"));
        assert!(!rendered.contains("-1.2"));
        assert!(rendered.contains("1000"));
        assert!(rendered.contains("1500"));
    }

    #[test]
    fn count_table_shows_counts_for_valid_cells() {
        let (grid, mask) = sample_grid();
        let rendered = count_grid_table(&grid, &mask).to_string();
        assert!(rendered.contains('5'));
    }

    #[test]
    fn series_table_handles_empty_series() {
        let rendered = series_table(&TrimSeries::default()).to_string();
        assert!(rendered.contains("STFT"));
        assert!(rendered.contains('0'));
        assert!(rendered.contains('-'));
    }

    #[test]
    fn series_table_reports_mean_and_range() {
        let series = TrimSeries {
            stft: vec![2.0, 4.0],
            ltft: vec![1.0, 1.0],
            total: vec![3.0, 5.0],
        };
        let rendered = series_table(&series).to_string();
        assert!(rendered.contains("3.00"));
        assert!(rendered.contains("2.00"));
        assert!(rendered.contains("5.00"));
    }
}
