//! Data model for transit operations log auditing.
//!
//! Rows arrive as loosely-typed spreadsheet cells ([`CellValue`]) keyed by the
//! fixed column schema ([`Field`]). Validation produces [`ValidationIssue`]s per
//! row and a [`ValidationResult`] for every row that has at least one.

pub mod averages;
pub mod cell;
pub mod error;
pub mod field;
pub mod incidence;
pub mod issue;
pub mod motivo;
pub mod options;
pub mod result;
pub mod row;

pub use averages::CycleAverages;
pub use cell::{CellValue, format_numeric};
pub use error::{OptionsError, Result, ValidationError};
pub use field::{Field, UnknownField};
pub use incidence::{Incidence, IncidenceCode};
pub use issue::ValidationIssue;
pub use motivo::MotivoCode;
pub use options::{DepartureWindow, QualityCheck, ValidationOptions};
pub use result::{PROBLEM_COLUMN_HEADER, ValidationResult, display_headers};
pub use row::{Row, RowSet};
