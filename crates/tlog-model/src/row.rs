use std::collections::HashMap;

use crate::cell::CellValue;
use crate::error::{Result, ValidationError};
use crate::field::Field;

/// One data row keyed by column header.
///
/// Unknown headers are kept but never consulted; schema columns that are
/// absent read as [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a schema field.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<CellValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<CellValue>) {
        self.cells.insert(field.as_str().to_string(), value.into());
    }

    /// Insert a cell under an arbitrary header.
    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.insert(header.into(), value);
    }

    /// Cell for a schema field, or `Empty` when the column is absent.
    pub fn get(&self, field: Field) -> &CellValue {
        self.cells.get(field.as_str()).unwrap_or(&EMPTY_CELL)
    }

    /// Cell under an arbitrary header.
    pub fn get_header(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }
}

impl FromIterator<(Field, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (Field, CellValue)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (field, value) in iter {
            row.set(field, value);
        }
        row
    }
}

/// Ordered header set plus the data rows that follow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Row set whose headers are exactly the schema columns.
    pub fn with_schema(rows: Vec<Row>) -> Self {
        let headers = Field::ALL
            .iter()
            .map(|field| field.as_str().to_string())
            .collect();
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Schema columns absent from the header set, in schema order.
    pub fn missing_columns(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| !self.headers.iter().any(|header| header == field.as_str()))
            .collect()
    }

    /// Fails with every missing schema column named at once.
    pub fn check_schema(&self) -> Result<()> {
        let columns = self.missing_columns();
        if columns.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingColumns { columns })
        }
    }
}
