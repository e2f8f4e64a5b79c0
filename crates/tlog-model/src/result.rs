//! Flagged-row output and its display projection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Header of the trailing display column listing the problem fields.
pub const PROBLEM_COLUMN_HEADER: &str = "Columnas faltantes";

/// A row that carries at least one validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Spreadsheet row number: data index + 2 (header row, 1-based).
    pub row_number: usize,
    /// Every schema field stringified; empty cells are empty strings.
    pub values: BTreeMap<Field, String>,
    /// Distinct fields with issues, in first-occurrence order.
    pub problem_fields: Vec<Field>,
}

impl ValidationResult {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Problem fields joined for display, e.g. `"Salida real, Ciclo"`.
    pub fn problem_summary(&self) -> String {
        self.problem_fields
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The 15 schema values in order, followed by the problem summary.
    pub fn display_row(&self) -> Vec<String> {
        let mut row: Vec<String> = Field::ALL
            .iter()
            .map(|field| self.value(*field).to_string())
            .collect();
        row.push(self.problem_summary());
        row
    }
}

/// Column headers matching [`ValidationResult::display_row`].
pub fn display_headers() -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = Field::ALL.iter().map(|field| field.as_str()).collect();
    headers.push(PROBLEM_COLUMN_HEADER);
    headers
}
