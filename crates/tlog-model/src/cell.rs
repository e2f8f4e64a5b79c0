//! Raw spreadsheet cell values.
//!
//! The ingestion boundary converts whatever the spreadsheet reader produced
//! into one of these variants, so downstream conversions are exhaustive
//! matches instead of open-ended type probing.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A loosely-typed cell as read from the operations log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// No value in the cell.
    #[default]
    Empty,
    /// Free text, untrimmed.
    Text(String),
    /// Integer or real number.
    Number(f64),
    /// Native time-of-day value.
    TimeOfDay(NaiveTime),
    /// Native date or date-time value.
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Returns the text content for text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(value: NaiveTime) -> Self {
        CellValue::TimeOfDay(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

/// Renders the cell the way the spreadsheet shows it.
///
/// Whole numbers drop their fractional part, times render as `HH:MM:SS`
/// and date-times as `YYYY-MM-DD HH:MM:SS`.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Number(value) => f.write_str(&format_numeric(*value)),
            CellValue::TimeOfDay(value) => write!(f, "{}", value.format("%H:%M:%S")),
            CellValue::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn format_numeric_strips_trailing_zeros() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-2.50), "-2.5");
    }

    #[test]
    fn display_matches_spreadsheet_rendering() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::text(" IN1 ").to_string(), " IN1 ");
        assert_eq!(CellValue::Number(829.0).to_string(), "829");
        let time = NaiveTime::from_hms_opt(6, 5, 0).unwrap();
        assert_eq!(CellValue::TimeOfDay(time).to_string(), "06:05:00");
        let date = NaiveDate::from_ymd_opt(2024, 8, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(date).to_string(), "2024-08-29 00:00:00");
    }
}
