use std::path::{Path, PathBuf};

use trim_cli::cli::{MapBinArg, ModeArg, ReportArgs, RpmBinArg};
use trim_cli::commands::run_report;

const LOG_CSV: &str = "\
Boost Pressure,Engine Speed,Short Trim,Long Trim
500,1000,2,1
500,1000,2,1
500,-5,9,9
530,1400,-1.5,0.5
";

const MAPPING_CSV: &str = "\
original,new
Boost Pressure,MAP_mbar
Engine Speed,RPM
Short Trim,STFT
Long Trim,LTFT
";

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let log_csv = dir.join("log.csv");
    let mapping_csv = dir.join("mapping.csv");
    std::fs::write(&log_csv, LOG_CSV).unwrap();
    std::fs::write(&mapping_csv, MAPPING_CSV).unwrap();
    (log_csv, mapping_csv)
}

fn default_args(log_csv: PathBuf, mapping_csv: PathBuf) -> ReportArgs {
    ReportArgs {
        log_csv,
        mapping_csv,
        rpm_bin: RpmBinArg::Rpm500,
        map_bin: MapBinArg::Map50,
        min_samples: 1,
        trim_min: -50.0,
        trim_max: 50.0,
        mode: ModeArg::Combined,
        json: false,
        no_series: false,
    }
}

#[test]
fn report_renders_tables_from_csv_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let (log_csv, mapping_csv) = write_inputs(dir.path());
    let args = default_args(log_csv, mapping_csv);
    run_report(&args).unwrap();
}

#[test]
fn report_emits_json_in_side_by_side_mode() {
    let dir = tempfile::tempdir().unwrap();
    let (log_csv, mapping_csv) = write_inputs(dir.path());
    let args = ReportArgs {
        mode: ModeArg::SideBySide,
        json: true,
        ..default_args(log_csv, mapping_csv)
    };
    run_report(&args).unwrap();
}

#[test]
fn trim_range_outside_bounds_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (log_csv, mapping_csv) = write_inputs(dir.path());
    let args = ReportArgs {
        trim_min: -60.0,
        ..default_args(log_csv, mapping_csv)
    };
    let error = run_report(&args).unwrap_err();
    assert!(error.to_string().contains("[-50, 50]"));
}

#[test]
fn inverted_trim_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (log_csv, mapping_csv) = write_inputs(dir.path());
    let args = ReportArgs {
        trim_min: 10.0,
        trim_max: -10.0,
        ..default_args(log_csv, mapping_csv)
    };
    let error = run_report(&args).unwrap_err();
    assert!(error.to_string().contains("--trim-min"));
}

#[test]
fn bad_mapping_table_surfaces_the_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let (log_csv, _) = write_inputs(dir.path());
    let mapping_csv = dir.path().join("bad_mapping.csv");
    std::fs::write(&mapping_csv, "original,target\nEngine Speed,RPM\n").unwrap();
    let args = default_args(log_csv, mapping_csv);
    let error = run_report(&args).unwrap_err();
    assert!(
        error
            .to_string()
            .contains("mapping table must contain 'original' and 'new' columns")
    );
}

#[test]
fn missing_log_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let (_, mapping_csv) = write_inputs(dir.path());
    let missing = dir.path().join("absent.csv");
    let args = default_args(missing.clone(), mapping_csv);
    let error = run_report(&args).unwrap_err();
    assert!(error.to_string().contains(missing.display().to_string().as_str()));
}
