use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use trim_core::{HeatmapRun, run_pipeline};
use trim_ingest::read_raw_table;
use trim_model::{
    BinOptions, CanonicalField, HeatmapOptions, ThresholdOptions, ViewMode,
};

use crate::cli::ReportArgs;
use crate::render::{apply_table_style, count_grid_table, series_table, value_grid_table};

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Field", "Description"]);
    for field in CanonicalField::ALL {
        table.add_row(vec![field.as_str(), field.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let options = options_from_args(args)?;
    let log = read_raw_table(&args.log_csv)?;
    let mapping = read_raw_table(&args.mapping_csv)?;
    info!(
        log = %args.log_csv.display(),
        mapping = %args.mapping_csv.display(),
        "loaded input tables"
    );

    let run = run_pipeline(&log, &mapping, &options)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&run.to_report()).context("serialize report")?;
        println!("{json}");
        return Ok(());
    }
    print_run(&run);
    Ok(())
}

fn options_from_args(args: &ReportArgs) -> Result<HeatmapOptions> {
    let range = -50.0..=50.0;
    if !range.contains(&args.trim_min) || !range.contains(&args.trim_max) {
        bail!("trim range must lie within [-50, 50]");
    }
    if args.trim_min > args.trim_max {
        bail!("--trim-min must not exceed --trim-max");
    }
    Ok(HeatmapOptions {
        bins: BinOptions {
            rpm_bin_size: args.rpm_bin.into(),
            map_bin_size: args.map_bin.into(),
        },
        thresholds: ThresholdOptions {
            min_samples: args.min_samples,
            trim_min: args.trim_min,
            trim_max: args.trim_max,
        },
        mode: args.mode.into(),
        include_series: !args.no_series,
    })
}

fn print_run(run: &HeatmapRun) {
    println!(
        "Rows: {} read, {} dropped, {} records",
        run.stats.rows_read, run.stats.rows_dropped, run.stats.records
    );

    for view in &run.views {
        println!();
        println!("{} mean trim (%)", view.signal.label());
        if view.grid.is_empty() {
            println!("(no data)");
            continue;
        }
        println!("{}", value_grid_table(&view.grid, &view.mask));
    }

    println!();
    println!("Sample counts");
    if run.counts.is_empty() {
        println!("(no data)");
    } else {
        // In side-by-side mode a cell is counted as shown when it is
        // valid for either signal.
        let count_mask = match (run.options.mode, &run.combined_mask) {
            (ViewMode::SideBySide, Some(combined)) => combined,
            _ => &run.views[0].mask,
        };
        println!("{}", count_grid_table(&run.counts, count_mask));
    }

    if let Some(series) = &run.series {
        println!();
        println!("Trim series");
        println!("{}", series_table(series));
    }
}
