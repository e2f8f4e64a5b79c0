use thiserror::Error;

use crate::field::Field;

/// Failure that aborts a whole validation pass.
///
/// Cell-level problems never surface here; they become
/// [`ValidationIssue`](crate::ValidationIssue)s on the affected row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more schema columns are absent from the input header set.
    #[error("missing required columns: {}", join_fields(.columns))]
    MissingColumns { columns: Vec<Field> },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Invalid option value supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Departure window not of the form `HH:MM-HH:MM` with start <= end.
    #[error("invalid departure window '{value}' (expected HH:MM-HH:MM)")]
    InvalidWindow { value: String },
}
