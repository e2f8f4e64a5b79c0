use std::io::Write;

use chrono::NaiveTime;
use tempfile::NamedTempFile;
use tlog_ingest::{filter_departure_window, load_cycle_averages, read_log_csv};
use tlog_model::{CellValue, DepartureWindow, Field};
use tlog_normalize::{is_empty, parse_motivo, to_integer, to_time_of_day};

const HEADER: &str = "\u{feff}Recorrido,Servicio,Unidad,Salida  programada,Salida real,Hora de llegada,\
Ciclo,Unidad saliente,Hora cambio,Parada,Incidencia,Motivo,Código,Conductor,Observaciones ";

fn write_log(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

#[test]
fn headers_are_normalized_to_the_schema() {
    let file = write_log(&["T1 - Playita,12,1045,06:00,06:03,06:30,27,,,,IN3,3/12,44,Ana Ruiz,"]);
    let rows = read_log_csv(file.path()).unwrap();
    assert!(rows.check_schema().is_ok(), "missing: {:?}", rows.missing_columns());
    assert_eq!(rows.len(), 1);
}

#[test]
fn cells_keep_their_meaning() {
    let file = write_log(&[
        "T1 - Playita,12,1045,06:00,06:03,06:30,27,,,,IN3,3/12,44,Ana Ruiz,",
        "T2 - Centro,0,1046,07:15,07:15,08:00,45,,,,,,45,Luis Mora,sin novedad",
    ]);
    let rows = read_log_csv(file.path()).unwrap();
    let first = &rows.rows[0];

    assert_eq!(to_integer(first.get(Field::Servicio)), Some(12));
    assert_eq!(
        to_time_of_day(first.get(Field::SalidaProgramada)),
        NaiveTime::from_hms_opt(6, 0, 0)
    );
    assert!(is_empty(first.get(Field::Parada)));
    assert_eq!(parse_motivo(first.get(Field::Motivo)).to_string(), "3-12");
    assert_eq!(
        first.get(Field::Conductor),
        &CellValue::Text("Ana Ruiz".to_string())
    );
    assert_eq!(to_integer(rows.rows[1].get(Field::Servicio)), Some(0));
}

#[test]
fn missing_column_survives_loading_for_the_engine_to_report() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Recorrido,Servicio").unwrap();
    writeln!(file, "T1 - Playita,12").unwrap();
    let rows = read_log_csv(file.path()).unwrap();
    let missing = rows.missing_columns();
    assert_eq!(missing.len(), 13);
    assert!(missing.contains(&Field::Conductor));
}

#[test]
fn window_filter_renumbers_rows() {
    let file = write_log(&[
        "T1 - Playita,1,1045,04:30,04:30,05:00,30,,,,,,44,Ana Ruiz,",
        "T1 - Playita,2,1045,05:10,05:10,05:40,30,,,,,,44,Ana Ruiz,",
        "T1 - Playita,3,1045,15:00,15:00,15:30,30,,,,,,44,Ana Ruiz,",
    ]);
    let rows = read_log_csv(file.path()).unwrap();
    let filtered = filter_departure_window(rows, DepartureWindow::default());
    assert_eq!(filtered.len(), 1);
    assert_eq!(to_integer(filtered.rows[0].get(Field::Servicio)), Some(2));
}

#[test]
fn averages_file_feeds_the_table() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Recorrido,Promedio").unwrap();
    writeln!(file, "T1 - Playita,25").unwrap();
    let averages = load_cycle_averages(file.path()).unwrap();
    assert_eq!(averages.get("T1 - Playita"), Some(25.0));
}
