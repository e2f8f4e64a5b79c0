//! Transit operations log auditor.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tlog_cli::logging::{LogConfig, LogFormat, init_logging};
use tlog_cli::report::render_json_report;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg, ReportArgs};
use crate::commands::{PassReport, run_columns, run_cycles, run_routes, run_validate};
use crate::summary::print_report;

/// Exit status when the pass completed and flagged at least one row.
const EXIT_FLAGGED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => finish_pass(run_validate(&args), &args.report),
        Command::Cycles(args) => finish_pass(run_cycles(&args), &args.report),
        Command::Columns => {
            run_columns();
            0
        }
        Command::Routes => {
            run_routes();
            0
        }
    };
    std::process::exit(exit_code);
}

fn finish_pass(outcome: anyhow::Result<PassReport>, args: &ReportArgs) -> i32 {
    let report = match outcome {
        Ok(report) => report,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    match args.format {
        OutputFormatArg::Table => print_report(&report, args.wide),
        OutputFormatArg::Json => {
            match render_json_report(report.pass, report.rows_read, &report.results) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    eprintln!("error: {error}");
                    return 1;
                }
            }
        }
    }
    if report.has_flagged_rows() { EXIT_FLAGGED } else { 0 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
