use std::collections::BTreeMap;

use tlog_model::{
    CellValue, CycleAverages, Field, MotivoCode, PROBLEM_COLUMN_HEADER, ValidationResult,
    display_headers,
};

fn sample_result() -> ValidationResult {
    let mut values: BTreeMap<Field, String> = Field::ALL
        .iter()
        .map(|field| (*field, String::new()))
        .collect();
    values.insert(Field::Recorrido, "T1 - Playita".to_string());
    values.insert(Field::Servicio, "12".to_string());
    values.insert(Field::Incidencia, "IN2".to_string());
    ValidationResult {
        row_number: 2,
        values,
        problem_fields: vec![Field::SalidaReal, Field::Parada],
    }
}

#[test]
fn display_row_has_sixteen_cells() {
    let result = sample_result();
    let row = result.display_row();
    assert_eq!(row.len(), 16);
    assert_eq!(row[0], "T1 - Playita");
    assert_eq!(row[10], "IN2");
    assert_eq!(row[15], "Salida real, Parada");
}

#[test]
fn display_headers_end_with_problem_column() {
    let headers = display_headers();
    assert_eq!(headers.len(), 16);
    assert_eq!(headers[12], "Código");
    assert_eq!(headers[15], PROBLEM_COLUMN_HEADER);
}

#[test]
fn problem_summary_snapshot() {
    insta::assert_snapshot!(sample_result().problem_summary(), @"Salida real, Parada");
}

#[test]
fn result_serializes_with_schema_names() {
    let json = serde_json::to_value(sample_result()).expect("serialize result");
    assert_eq!(json["row_number"], 2);
    assert_eq!(json["values"]["Salida programada"], "");
    assert_eq!(json["problem_fields"][0], "Salida real");
}

#[test]
fn cycle_averages_use_exact_keys() {
    let averages: CycleAverages = [("T1 - Playita", 42.5)].into_iter().collect();
    assert_eq!(averages.get("T1 - Playita"), Some(42.5));
    assert_eq!(averages.get("t1-playita"), None);
    assert_eq!(averages.len(), 1);
}

#[test]
fn motivo_constants() {
    assert_eq!(MotivoCode::UNIT_CHANGE, MotivoCode::pair(8, 29));
    assert_eq!(MotivoCode::UNIT_WITHDRAWN.to_string(), "8-35");
    assert!(MotivoCode::ABSENT.is_absent());
    assert_eq!(MotivoCode::sub_only(7).to_string(), "7");
}

#[test]
fn cell_value_conversions() {
    assert_eq!(CellValue::from("IN1"), CellValue::text("IN1"));
    assert_eq!(CellValue::from(5_i64), CellValue::Number(5.0));
    assert_eq!(CellValue::text("x").as_text(), Some("x"));
    assert_eq!(CellValue::Number(1.0).as_text(), None);
}
