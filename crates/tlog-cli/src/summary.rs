use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tlog_model::{Field, ValidationResult, display_headers};

use crate::commands::PassReport;

/// Columns worth showing on a terminal; the CSV report carries all of them.
const TERMINAL_FIELDS: &[Field] = &[
    Field::Recorrido,
    Field::Servicio,
    Field::Unidad,
    Field::SalidaProgramada,
    Field::SalidaReal,
    Field::Ciclo,
    Field::Incidencia,
    Field::Motivo,
];

pub fn print_report(report: &PassReport, wide: bool) {
    if report.has_flagged_rows() {
        let table = if wide {
            full_table(&report.results)
        } else {
            compact_table(&report.results)
        };
        println!("{table}");
    }
    let summary = format!(
        "{}: {} rows read, {} flagged",
        report.pass,
        report.rows_read,
        report.results.len()
    );
    println!("{summary}");
}

fn compact_table(results: &[ValidationResult]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Fila")];
    header.extend(TERMINAL_FIELDS.iter().map(|field| header_cell(field.as_str())));
    header.push(header_cell(tlog_model::PROBLEM_COLUMN_HEADER));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for result in results {
        let mut row = vec![Cell::new(result.row_number)];
        row.extend(TERMINAL_FIELDS.iter().map(|field| value_cell(result, *field)));
        row.push(problem_cell(result));
        table.add_row(row);
    }
    table
}

fn full_table(results: &[ValidationResult]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Fila")];
    header.extend(display_headers().into_iter().map(header_cell));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for result in results {
        let mut row = vec![Cell::new(result.row_number)];
        row.extend(Field::ALL.iter().map(|field| value_cell(result, *field)));
        row.push(problem_cell(result));
        table.add_row(row);
    }
    table
}

fn value_cell(result: &ValidationResult, field: Field) -> Cell {
    let value = result.value(field);
    if result.problem_fields.contains(&field) {
        if value.is_empty() {
            Cell::new("∅").fg(Color::Red)
        } else {
            Cell::new(value).fg(Color::Red)
        }
    } else if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn problem_cell(result: &ValidationResult) -> Cell {
    Cell::new(result.problem_summary())
        .fg(Color::Yellow)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
