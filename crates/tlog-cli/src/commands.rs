use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use tlog_cli::report::write_csv_report;
use tlog_ingest::{filter_departure_window, load_cycle_averages, read_log_csv};
use tlog_model::{DepartureWindow, Field, QualityCheck, RowSet, ValidationOptions, ValidationResult};
use tlog_validate::{route_cycle_limits, validate_cycles, validate_rows_with_options};

use crate::cli::{CyclesArgs, ValidateArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

/// Outcome of one validation pass over a file.
pub struct PassReport {
    pub pass: &'static str,
    pub rows_read: usize,
    pub results: Vec<ValidationResult>,
}

impl PassReport {
    pub fn has_flagged_rows(&self) -> bool {
        !self.results.is_empty()
    }
}

pub fn run_columns() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for field in Field::ALL {
        table.add_row(vec![Cell::new(field.index() + 1), Cell::new(field.as_str())]);
    }
    println!("{table}");
}

pub fn run_routes() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Route key"), header_cell("Cycle limit")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (route, limit) in route_cycle_limits() {
        table.add_row(vec![Cell::new(route), Cell::new(limit)]);
    }
    println!("{table}");
}

pub fn run_validate(args: &ValidateArgs) -> Result<PassReport> {
    let span = info_span!("validate_file", input = %args.input.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let checks: Vec<QualityCheck> = if args.all_checks {
        QualityCheck::ALL.to_vec()
    } else {
        args.checks.iter().copied().map(QualityCheck::from).collect()
    };
    let options = ValidationOptions::new()
        .with_quality_checks(checks)
        .with_departure_window(args.input.window);

    let rows = load_rows(&args.input.input, options.departure_window)?;
    let averages = args
        .averages
        .as_deref()
        .map(|path| {
            load_cycle_averages(path)
                .with_context(|| format!("load cycle averages from {}", path.display()))
        })
        .transpose()?;

    let results = validate_rows_with_options(&rows, averages.as_ref(), &options)
        .context("validate log rows")?;
    if let Some(path) = &args.report.output {
        write_report_file(path, &results)?;
    }
    info!(
        row_count = rows.len(),
        flagged = results.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation finished"
    );
    Ok(PassReport {
        pass: "validate",
        rows_read: rows.len(),
        results,
    })
}

pub fn run_cycles(args: &CyclesArgs) -> Result<PassReport> {
    let span = info_span!("cycles_file", input = %args.input.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = load_rows(&args.input.input, args.input.window)?;
    let results = validate_cycles(&rows).context("check cycle limits")?;
    if let Some(path) = &args.report.output {
        write_report_file(path, &results)?;
    }
    info!(
        row_count = rows.len(),
        flagged = results.len(),
        duration_ms = start.elapsed().as_millis(),
        "cycle check finished"
    );
    Ok(PassReport {
        pass: "cycles",
        rows_read: rows.len(),
        results,
    })
}

fn load_rows(path: &Path, window: Option<DepartureWindow>) -> Result<RowSet> {
    let rows =
        read_log_csv(path).with_context(|| format!("read log export {}", path.display()))?;
    Ok(match window {
        Some(window) => filter_departure_window(rows, window),
        None => rows,
    })
}

fn write_report_file(path: &Path, results: &[ValidationResult]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv_report(BufWriter::new(file), results)
        .with_context(|| format!("write report to {}", path.display()))?;
    info!(path = %path.display(), flagged = results.len(), "report written");
    Ok(())
}
