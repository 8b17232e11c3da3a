//! CLI argument definitions for the data-profile report tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dpr_classify::DEFAULT_PROFILE_FIELD_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "dpr",
    version,
    about = "Data-profile report - render column profiling results from a workunit",
    long_about = "Fetch column-profiling results from a workunit service and render\n\
                  them as a terminal table, a self-contained HTML report, or JSON\n\
                  cell descriptors."
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
    /// Fetch a workunit's profile result and render the report.
    Report(ReportArgs),

    /// Render a report from a local JSON dump of profile rows.
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Hosted report URL
    /// (<base>/WsWorkunits/res/<wuid>/report/res/index.html).
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format to render.
    #[arg(long = "output-format", value_enum, default_value = "table")]
    pub output_format: OutputFormatArg,

    /// Write the rendered report to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Minimum schema-column matches for a result to classify as profile
    /// output.
    #[arg(long = "threshold", default_value_t = DEFAULT_PROFILE_FIELD_THRESHOLD)]
    pub threshold: usize,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to a JSON file holding profile rows (a bare array or a
    /// {"Row": [...]} wrapper).
    #[arg(value_name = "ROWS")]
    pub rows: PathBuf,

    /// Output format to render.
    #[arg(long = "output-format", value_enum, default_value = "table")]
    pub output_format: OutputFormatArg,

    /// Write the rendered report to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Html,
    Json,
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
