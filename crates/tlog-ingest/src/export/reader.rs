//! CSV export reading into a typed row set.

use std::path::Path;

use polars::prelude::{AnyValue, Column, CsvReadOptions, DataFrame, SerReader};
use tlog_model::{Row, RowSet};

use crate::cell::cell_from_any;
use crate::error::{IngestError, Result, io_error};

use super::header::normalize_header;

/// Read a CSV export of the operations log.
///
/// The first row is the header. Date, date-time and time columns are parsed
/// natively where Polars recognizes them; everything else stays numeric or
/// text as inferred.
pub fn read_log_csv(path: &Path) -> Result<RowSet> {
    let df = read_log_frame(path)?;
    let rows = rows_from_dataframe(&df);
    tracing::debug!(
        path = %path.display(),
        row_count = rows.len(),
        columns = rows.headers.len(),
        "log export loaded"
    );
    Ok(rows)
}

/// Read the export into a DataFrame without converting cells.
pub fn read_log_frame(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    // Hand-typed columns mix numbers and text far down the file.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| options.with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)
}

/// Convert every cell of a DataFrame, keyed by normalized header name.
pub fn rows_from_dataframe(df: &DataFrame) -> RowSet {
    let columns: Vec<(String, &Column)> = df
        .get_columns()
        .iter()
        .map(|column| (normalize_header(column.name().as_str()), column))
        .collect();
    let headers = columns.iter().map(|(name, _)| name.clone()).collect();

    let rows = (0..df.height())
        .map(|idx| {
            let mut row = Row::new();
            for (name, column) in &columns {
                let value = column.get(idx).unwrap_or(AnyValue::Null);
                row.insert(name.clone(), cell_from_any(&value));
            }
            row
        })
        .collect();

    RowSet::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_log_frame_shape() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let df = read_log_frame(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_log_csv(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_log_csv(Path::new("/nonexistent/bitacora.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
