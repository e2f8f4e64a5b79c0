//! Conversions from raw cells to canonical semantic values.
//!
//! Every function here is total: malformed input maps to `None` (or an empty
//! string) so callers can report it as an issue instead of failing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use tlog_model::CellValue;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MINUTES_PER_DAY: f64 = 1_440.0;

/// Time-only layouts, tried in order.
const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M%p",
];

/// Date-time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// True for absent cells, NaN numbers, and text that is blank or "nan".
///
/// This is the single emptiness predicate used by every rule.
pub fn is_empty(value: &CellValue) -> bool {
    match value {
        CellValue::Empty => true,
        CellValue::Number(v) => v.is_nan(),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
        }
        CellValue::TimeOfDay(_) | CellValue::DateTime(_) => false,
    }
}

/// Cell rendered for display; empty cells become an empty string.
pub fn display_value(value: &CellValue) -> String {
    if is_empty(value) {
        String::new()
    } else {
        value.to_string()
    }
}

/// Interpret a cell as a time of day.
///
/// Numbers in `[0, 1)` are spreadsheet day fractions (0.5 is noon).
pub fn to_time_of_day(value: &CellValue) -> Option<NaiveTime> {
    if is_empty(value) {
        return None;
    }
    match value {
        CellValue::TimeOfDay(time) => Some(*time),
        CellValue::DateTime(datetime) => Some(datetime.time()),
        CellValue::Number(v) if (0.0..1.0).contains(v) => day_fraction_to_time(*v),
        CellValue::Text(text) => parse_time_text(text),
        CellValue::Number(_) | CellValue::Empty => None,
    }
}

fn day_fraction_to_time(fraction: f64) -> Option<NaiveTime> {
    let seconds = (fraction * SECONDS_PER_DAY).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}

/// Permissive time parser for free text.
///
/// Accepts bare times (`06:05`, `6:05:30`, `6:05 PM`), date-times (whose time
/// component is kept) and bare dates (midnight).
pub fn parse_time_text(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Some(time);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.time());
        }
    }
    for format in DATE_FORMATS {
        if NaiveDate::parse_from_str(trimmed, format).is_ok() {
            return Some(NaiveTime::MIN);
        }
    }
    None
}

/// Interpret a cell as an integer.
///
/// Text is trimmed and parsed; numbers convert only when they are whole.
pub fn to_integer(value: &CellValue) -> Option<i64> {
    if is_empty(value) {
        return None;
    }
    match value {
        CellValue::Number(v) => whole_number(*v),
        CellValue::Text(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub(crate) fn whole_number(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Interpret a cell as a real number.
pub fn to_real(value: &CellValue) -> Option<f64> {
    if is_empty(value) {
        return None;
    }
    match value {
        CellValue::Number(v) => Some(*v),
        CellValue::Text(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Interpret a cell as a duration in minutes.
///
/// A time-of-day reading wins (`01:10` is 70 minutes). Otherwise a number in
/// `[0, 1)` is a day fraction and any other number is already minutes.
pub fn to_minutes(value: &CellValue) -> Option<f64> {
    if let Some(time) = to_time_of_day(value) {
        return Some(
            f64::from(time.hour()) * 60.0
                + f64::from(time.minute())
                + f64::from(time.second()) / 60.0,
        );
    }
    let real = to_real(value)?;
    if (0.0..1.0).contains(&real) {
        Some(real * MINUTES_PER_DAY)
    } else {
        Some(real)
    }
}

/// Upper-cased incidence text truncated to its first three characters.
///
/// `"in2 - adelanto"` becomes `"IN2"`; an empty cell becomes `""`.
pub fn normalize_incidence_code(value: &CellValue) -> String {
    if is_empty(value) {
        return String::new();
    }
    value
        .to_string()
        .trim()
        .to_uppercase()
        .chars()
        .take(3)
        .collect()
}
