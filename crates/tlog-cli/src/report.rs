//! Machine-readable renderings of a flagged-row report.

use std::io::Write;

use serde::Serialize;
use tlog_model::{ValidationResult, display_headers};

/// Write the 16-column report (schema columns plus "Columnas faltantes").
pub fn write_csv_report<W: Write>(writer: W, results: &[ValidationResult]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(display_headers())?;
    for result in results {
        writer.write_record(result.display_row())?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    pass: &'a str,
    rows_read: usize,
    flagged: usize,
    results: &'a [ValidationResult],
}

/// Pretty-printed JSON document describing one pass.
pub fn render_json_report(
    pass: &str,
    rows_read: usize,
    results: &[ValidationResult],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        pass,
        rows_read,
        flagged: results.len(),
        results,
    })
}
