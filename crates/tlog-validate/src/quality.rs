//! Data-entry quality detectors.
//!
//! These are opt-in and run after the incidence rule for a row. They never
//! apply to the cycle-limit pass.

use tlog_model::{CellValue, Field, QualityCheck, Row, ValidationIssue};
use tlog_normalize::{display_value, is_empty, to_integer};

/// Values typed in place of real data.
const PLACEHOLDERS: &[&str] = &[
    "N/A", "NA", "ERROR", "---", "...", "XXX", "SIN DATO", "POR LLENAR", "TEMP",
];

/// Characters never expected in identifier columns.
const INVALID_CHARS: &[char] = &['@', '#', '$', '%', '&', '*', '!', '¡'];

const IDENTIFIER_FIELDS: &[Field] = &[Field::Recorrido, Field::Servicio, Field::Unidad, Field::Codigo];

/// Inclusive bounds for numeric columns.
const NUMERIC_RANGES: &[(Field, i64, i64)] = &[
    (Field::Servicio, 1, 999),
    (Field::Unidad, 1, 99_999),
    (Field::Codigo, 1, 999),
];

const FREE_TEXT_FIELDS: &[Field] = &[Field::Motivo, Field::Conductor];

/// Run the selected detectors in the order given.
pub fn run_checks(row: &Row, checks: &[QualityCheck]) -> Vec<ValidationIssue> {
    checks.iter().flat_map(|check| run_check(row, *check)).collect()
}

pub fn run_check(row: &Row, check: QualityCheck) -> Vec<ValidationIssue> {
    match check {
        QualityCheck::Placeholders => check_placeholders(row),
        QualityCheck::ExtraSpaces => check_extra_spaces(row),
        QualityCheck::InvalidCharacters => check_invalid_characters(row),
        QualityCheck::NumericRange => check_numeric_ranges(row),
        QualityCheck::TextQuality => check_text_quality(row),
    }
}

/// Non-empty cells of `fields` with their display text.
fn filled<'a>(row: &'a Row, fields: &'a [Field]) -> impl Iterator<Item = (Field, &'a CellValue)> + 'a {
    fields
        .iter()
        .map(|field| (*field, row.get(*field)))
        .filter(|(_, value)| !is_empty(value))
}

fn check_placeholders(row: &Row) -> Vec<ValidationIssue> {
    filled(row, &Field::ALL)
        .filter_map(|(field, value)| {
            let text = display_value(value);
            let upper = text.trim().to_uppercase();
            PLACEHOLDERS.contains(&upper.as_str()).then(|| {
                ValidationIssue::new(
                    field,
                    format!("Valor sospechoso: '{}' (parece un placeholder)", text.trim()),
                )
            })
        })
        .collect()
}

fn check_extra_spaces(row: &Row) -> Vec<ValidationIssue> {
    filled(row, &Field::ALL)
        .filter_map(|(field, value)| match value {
            CellValue::Text(text) if text.trim() != text => Some(ValidationIssue::new(
                field,
                "Error de digitación: espacios al inicio o al final",
            )),
            _ => None,
        })
        .collect()
}

fn check_invalid_characters(row: &Row) -> Vec<ValidationIssue> {
    filled(row, IDENTIFIER_FIELDS)
        .filter_map(|(field, value)| {
            let text = display_value(value);
            text.contains(INVALID_CHARS).then(|| {
                ValidationIssue::new(field, format!("Contiene caracteres inválidos: '{}'", text.trim()))
            })
        })
        .collect()
}

fn check_numeric_ranges(row: &Row) -> Vec<ValidationIssue> {
    NUMERIC_RANGES
        .iter()
        .filter(|(field, _, _)| !is_empty(row.get(*field)))
        .filter_map(|(field, min, max)| {
            let value = row.get(*field);
            match to_integer(value) {
                None => Some(ValidationIssue::new(
                    *field,
                    format!("No es un número válido: '{}'", display_value(value).trim()),
                )),
                Some(n) if n < *min || n > *max => Some(ValidationIssue::new(
                    *field,
                    format!("Número fuera de rango ({min}-{max}): {n}"),
                )),
                Some(_) => None,
            }
        })
        .collect()
}

fn check_text_quality(row: &Row) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (field, value) in filled(row, FREE_TEXT_FIELDS) {
        let text = display_value(value);
        let text = text.trim();

        if field == Field::Conductor && text.chars().all(|c| c.is_ascii_digit()) {
            issues.push(ValidationIssue::new(
                field,
                "El conductor debe ser un nombre, no solo números",
            ));
        }
        if text.chars().count() < 2 {
            issues.push(ValidationIssue::new(
                field,
                "Texto muy corto (posible error de digitación)",
            ));
        }
        if has_long_run(text) {
            issues.push(ValidationIssue::new(
                field,
                "Contiene caracteres repetidos en exceso",
            ));
        }
    }
    issues
}

/// Three or more identical lowercase letters or digits in a row.
fn has_long_run(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(3)
        .any(|w| (w[0].is_ascii_lowercase() || w[0].is_ascii_digit()) && w[0] == w[1] && w[1] == w[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_values_are_flagged() {
        let row = Row::new().with(Field::Unidad, "xxx").with(Field::Codigo, "12");
        let issues = run_check(&row, QualityCheck::Placeholders);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Unidad);
    }

    #[test]
    fn padded_text_is_flagged_but_numbers_are_not() {
        let row = Row::new()
            .with(Field::Conductor, " Ana Ruiz")
            .with(Field::Unidad, 120.0);
        let issues = run_check(&row, QualityCheck::ExtraSpaces);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Conductor);
    }

    #[test]
    fn numeric_range_flags_out_of_range_and_garbage() {
        let row = Row::new()
            .with(Field::Servicio, 1200.0)
            .with(Field::Unidad, "12a")
            .with(Field::Codigo, 5.0);
        let fields: Vec<Field> = run_check(&row, QualityCheck::NumericRange)
            .into_iter()
            .map(|issue| issue.field)
            .collect();
        assert_eq!(fields, vec![Field::Servicio, Field::Unidad]);
    }

    #[test]
    fn text_quality_detects_numeric_driver_and_repeats() {
        let row = Row::new().with(Field::Conductor, "1000");
        let issues = run_check(&row, QualityCheck::TextQuality);
        assert_eq!(issues.len(), 2);
        assert!(has_long_run("aaab"));
        assert!(!has_long_run("a a a"));
    }

    #[test]
    fn uppercase_runs_are_not_repeats() {
        assert!(!has_long_run("AAA"));
        let row = Row::new().with(Field::Conductor, "AAAron Ruiz");
        assert!(run_check(&row, QualityCheck::TextQuality).is_empty());
    }

    #[test]
    fn invalid_characters_only_in_identifier_columns() {
        let row = Row::new()
            .with(Field::Recorrido, "T1#")
            .with(Field::Observaciones, "¡ojo!");
        let issues = run_check(&row, QualityCheck::InvalidCharacters);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Recorrido);
    }
}
