//! Validation passes over a loaded row set.

use tracing::{debug, info, info_span, trace, warn};

use tlog_model::{
    CellValue, CycleAverages, Field, Incidence, IncidenceCode, Result, Row, RowSet,
    ValidationIssue, ValidationOptions, ValidationResult,
};
use tlog_normalize::{display_value, normalize_incidence_code, to_integer};

use crate::cycle::{check_cycle_average, check_cycle_limit};
use crate::quality::run_checks;
use crate::rules::{rule_for, rule_no_incidence};

/// Spreadsheet offset: one header row and 1-based numbering.
const ROW_NUMBER_OFFSET: usize = 2;

/// Outcome of evaluating one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Service 0 outside IN7: the row is excluded from the report.
    Suppressed,
    /// Issues for the row, empty when it is clean.
    Issues {
        incidence: Incidence,
        issues: Vec<ValidationIssue>,
    },
}

/// Classify a row by its "Incidencia" cell.
pub fn classify_incidence(value: &CellValue) -> Incidence {
    Incidence::from_normalized(&normalize_incidence_code(value))
}

/// Issues raised by the incidence rule. Unregistered codes raise none.
pub fn rule_issues(row: &Row, incidence: &Incidence) -> Vec<ValidationIssue> {
    match incidence {
        Incidence::None => rule_no_incidence(row),
        Incidence::Registered(code) => rule_for(*code)(row),
        Incidence::Unregistered(_) => Vec::new(),
    }
}

fn is_suppressed(row: &Row, incidence: &Incidence) -> bool {
    to_integer(row.get(Field::Servicio)) == Some(0) && !incidence.is(IncidenceCode::In7)
}

/// Evaluate a single row for the incidence pass.
pub fn evaluate_row(
    row: &Row,
    averages: Option<&CycleAverages>,
    options: &ValidationOptions,
) -> RowOutcome {
    let incidence = classify_incidence(row.get(Field::Incidencia));
    if is_suppressed(row, &incidence) {
        return RowOutcome::Suppressed;
    }
    let mut issues = rule_issues(row, &incidence);
    issues.extend(run_checks(row, &options.quality_checks));
    if let Some(averages) = averages {
        issues.extend(check_cycle_average(row, averages));
    }
    RowOutcome::Issues { incidence, issues }
}

/// Evaluate a single row for the cycle-limit pass.
pub fn evaluate_row_cycles(row: &Row) -> RowOutcome {
    let incidence = classify_incidence(row.get(Field::Incidencia));
    if is_suppressed(row, &incidence) {
        return RowOutcome::Suppressed;
    }
    let issues = check_cycle_limit(row, &incidence);
    RowOutcome::Issues { incidence, issues }
}

/// Incidence pass with default options.
pub fn validate_rows(rows: &RowSet, averages: Option<&CycleAverages>) -> Result<Vec<ValidationResult>> {
    validate_rows_with_options(rows, averages, &ValidationOptions::default())
}

/// Run the incidence rules (plus averages and any quality checks) on every row.
///
/// Fails before examining any row when schema columns are missing.
pub fn validate_rows_with_options(
    rows: &RowSet,
    averages: Option<&CycleAverages>,
    options: &ValidationOptions,
) -> Result<Vec<ValidationResult>> {
    let span = info_span!("validate", row_count = rows.len());
    let _guard = span.enter();
    check_schema(rows)?;

    let averages = averages.filter(|averages| !averages.is_empty());
    if let Some(averages) = averages {
        debug!(routes = averages.len(), "cycle averages enabled");
    }
    run_pass(rows, |row| evaluate_row(row, averages, options))
}

/// Check every row's cycle against the built-in route limit table.
pub fn validate_cycles(rows: &RowSet) -> Result<Vec<ValidationResult>> {
    let span = info_span!("cycles", row_count = rows.len());
    let _guard = span.enter();
    check_schema(rows)?;
    run_pass(rows, evaluate_row_cycles)
}

fn check_schema(rows: &RowSet) -> Result<()> {
    rows.check_schema().inspect_err(|error| warn!(%error, "schema check failed"))
}

fn run_pass(rows: &RowSet, evaluate: impl Fn(&Row) -> RowOutcome) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    let mut suppressed = 0usize;
    for (index, row) in rows.rows.iter().enumerate() {
        match evaluate(row) {
            RowOutcome::Suppressed => suppressed += 1,
            RowOutcome::Issues { incidence, issues } => {
                if let Some(result) = build_result(index, row, &issues) {
                    trace!(
                        row_number = result.row_number,
                        %incidence,
                        problem_fields = %result.problem_summary(),
                        issues = issues.len(),
                        "row flagged"
                    );
                    results.push(result);
                }
            }
        }
    }
    info!(
        flagged = results.len(),
        suppressed,
        "validation pass complete"
    );
    Ok(results)
}

/// Snapshot a flagged row; `None` when there are no issues.
pub fn build_result(index: usize, row: &Row, issues: &[ValidationIssue]) -> Option<ValidationResult> {
    if issues.is_empty() {
        return None;
    }
    let values = Field::ALL
        .iter()
        .map(|field| (*field, display_value(row.get(*field))))
        .collect();
    let mut problem_fields: Vec<Field> = Vec::new();
    for issue in issues {
        if !problem_fields.contains(&issue.field) {
            problem_fields.push(issue.field);
        }
    }
    Some(ValidationResult {
        row_number: index + ROW_NUMBER_OFFSET,
        values,
        problem_fields,
    })
}
