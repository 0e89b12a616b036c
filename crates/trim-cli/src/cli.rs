//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use trim_model::{MapBinSize, RpmBinSize, ViewMode};

#[derive(Parser)]
#[command(
    name = "trim-heatmap",
    version,
    about = "Fuel trim heatmap generator - grid summaries from engine telemetry logs",
    long_about = "Summarize engine telemetry logs into (RPM, MAP) grids of mean fuel trim.\n\n\
                  Takes a log CSV with arbitrary column headers plus a two-column\n\
                  mapping CSV ('original', 'new') renaming them onto the canonical\n\
                  fields MAP_mbar, RPM, STFT, and LTFT."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute grids, masks, and the trim series for one log file.
    Report(ReportArgs),

    /// List the canonical fields every source schema must map onto.
    Fields,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the telemetry log CSV.
    #[arg(value_name = "LOG_CSV")]
    pub log_csv: PathBuf,

    /// Path to the column mapping CSV ('original', 'new').
    #[arg(value_name = "MAPPING_CSV")]
    pub mapping_csv: PathBuf,

    /// RPM bin width.
    #[arg(long = "rpm-bin", value_enum, default_value = "500")]
    pub rpm_bin: RpmBinArg,

    /// MAP bin width in mbar.
    #[arg(long = "map-bin", value_enum, default_value = "50")]
    pub map_bin: MapBinArg,

    /// Minimum samples for a cell to count as valid.
    #[arg(
        long = "min-samples",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    pub min_samples: u32,

    /// Lower trim bound (%) for a cell to count as valid.
    #[arg(long = "trim-min", default_value_t = -50.0, allow_negative_numbers = true)]
    pub trim_min: f64,

    /// Upper trim bound (%) for a cell to count as valid.
    #[arg(long = "trim-max", default_value_t = 50.0, allow_negative_numbers = true)]
    pub trim_max: f64,

    /// Heatmap view to compute.
    #[arg(long = "mode", value_enum, default_value = "stft")]
    pub mode: ModeArg,

    /// Emit the full report as JSON instead of rendered tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Skip the sequential trim series.
    #[arg(long = "no-series")]
    pub no_series: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RpmBinArg {
    #[value(name = "250")]
    Rpm250,
    #[value(name = "500")]
    Rpm500,
    #[value(name = "1000")]
    Rpm1000,
}

impl From<RpmBinArg> for RpmBinSize {
    fn from(arg: RpmBinArg) -> Self {
        match arg {
            RpmBinArg::Rpm250 => Self::Rpm250,
            RpmBinArg::Rpm500 => Self::Rpm500,
            RpmBinArg::Rpm1000 => Self::Rpm1000,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MapBinArg {
    #[value(name = "25")]
    Map25,
    #[value(name = "50")]
    Map50,
    #[value(name = "100")]
    Map100,
}

impl From<MapBinArg> for MapBinSize {
    fn from(arg: MapBinArg) -> Self {
        match arg {
            MapBinArg::Map25 => Self::Map25,
            MapBinArg::Map50 => Self::Map50,
            MapBinArg::Map100 => Self::Map100,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Stft,
    Ltft,
    Combined,
    SideBySide,
}

impl From<ModeArg> for ViewMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Stft => Self::Stft,
            ModeArg::Ltft => Self::Ltft,
            ModeArg::Combined => Self::Combined,
            ModeArg::SideBySide => Self::SideBySide,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
