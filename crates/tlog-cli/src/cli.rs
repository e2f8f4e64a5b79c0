//! CLI argument definitions for the log auditor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tlog_model::{DepartureWindow, QualityCheck};

#[derive(Parser)]
#[command(
    name = "tlog",
    version,
    about = "Audit transit operations logs for incidence and cycle errors",
    long_about = "Audit a CSV export of the daily operations log.\n\n\
                  Each row is checked against the rule of its incidence code (IN1-IN7),\n\
                  optionally against per-route cycle averages, and reported when any\n\
                  field is out of place. Exit status is 2 when rows were flagged."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Check every row against its incidence rule.
    Validate(ValidateArgs),

    /// Check cycle durations against the built-in route limits.
    Cycles(CyclesArgs),

    /// List the columns a log export must contain.
    Columns,

    /// List the built-in route cycle limits.
    Routes,
}

#[derive(Args)]
pub struct InputArgs {
    /// CSV export of the operations log.
    #[arg(value_name = "LOG_CSV")]
    pub input: PathBuf,

    /// Keep only rows scheduled inside this window, e.g. 04:50-14:00.
    #[arg(long = "window", value_name = "HH:MM-HH:MM")]
    pub window: Option<DepartureWindow>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Also write the flagged rows to a CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How to print the flagged rows.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Show all 15 columns in the terminal table.
    #[arg(long = "wide")]
    pub wide: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Per-route cycle averages (CSV with columns Recorrido,Promedio).
    #[arg(long = "averages", value_name = "PATH")]
    pub averages: Option<PathBuf>,

    /// Data-entry quality check to run in addition to the rules (repeatable).
    #[arg(long = "check", value_enum, value_name = "CHECK")]
    pub checks: Vec<QualityCheckArg>,

    /// Run every data-entry quality check.
    #[arg(long = "all-checks", conflicts_with = "checks")]
    pub all_checks: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args)]
pub struct CyclesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QualityCheckArg {
    Placeholders,
    ExtraSpaces,
    InvalidCharacters,
    NumericRange,
    TextQuality,
}

impl From<QualityCheckArg> for QualityCheck {
    fn from(arg: QualityCheckArg) -> Self {
        match arg {
            QualityCheckArg::Placeholders => QualityCheck::Placeholders,
            QualityCheckArg::ExtraSpaces => QualityCheck::ExtraSpaces,
            QualityCheckArg::InvalidCharacters => QualityCheck::InvalidCharacters,
            QualityCheckArg::NumericRange => QualityCheck::NumericRange,
            QualityCheckArg::TextQuality => QualityCheck::TextQuality,
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
