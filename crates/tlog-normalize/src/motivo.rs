//! Reason-code ("Motivo") parsing.
//!
//! Operators type the reason as a plain number (`829`), a separated pair
//! (`8/29`, `8 - 35`, `8|29`), or the spreadsheet turns it into a date
//! (`2024-08-29`). The parser recovers the (main, sub) pair,
//! preferring the most specific pattern before weaker heuristics.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use tlog_model::{CellValue, MotivoCode};

use crate::value::{is_empty, whole_number};

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

static SEPARATED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*[|/\-]\s*([0-9]+)").expect("Invalid separated pair regex")
});

/// Smallest leading digit run treated as a year.
const YEAR_FLOOR: i64 = 1900;

/// Parse the "Motivo" cell into a (main, sub) pair.
pub fn parse_motivo(value: &CellValue) -> MotivoCode {
    if is_empty(value) {
        return MotivoCode::ABSENT;
    }
    match value {
        CellValue::DateTime(datetime) => {
            MotivoCode::pair(i64::from(datetime.month()), i64::from(datetime.day()))
        }
        CellValue::Number(v) => parse_number(*v),
        CellValue::Text(text) => parse_text(text),
        CellValue::TimeOfDay(_) | CellValue::Empty => MotivoCode::ABSENT,
    }
}

fn parse_number(value: f64) -> MotivoCode {
    if value.is_finite()
        && value.fract() != 0.0
        && let Some(pair) = split_decimal(value)
    {
        return pair;
    }
    let Some(integer) = whole_number(value.trunc()) else {
        return MotivoCode::ABSENT;
    };
    split_leading_digit(integer)
}

/// `8.29` reads as main 8, sub 29.
fn split_decimal(value: f64) -> Option<MotivoCode> {
    let text = value.to_string();
    let (main, sub) = text.split_once('.')?;
    Some(MotivoCode::pair(main.parse().ok()?, sub.parse().ok()?))
}

/// `829` reads as main 8, sub 29; single digits are a bare sub-code.
fn split_leading_digit(integer: i64) -> MotivoCode {
    if integer < 10 {
        return MotivoCode::sub_only(integer);
    }
    let digits = integer.to_string();
    let (main, rest) = digits.split_at(1);
    match (main.parse(), rest.parse()) {
        (Ok(main), Ok(sub)) => MotivoCode::pair(main, sub),
        _ => MotivoCode::sub_only(integer),
    }
}

fn parse_text(text: &str) -> MotivoCode {
    let runs: Vec<&str> = DIGIT_RUN.find_iter(text).map(|m| m.as_str()).collect();

    // Year-prefixed text: the last two digit runs are the code.
    if let [first, .., main, sub] = runs.as_slice()
        && first.parse::<i64>().is_ok_and(|year| year >= YEAR_FLOOR)
        && let Some(pair) = parse_pair(main, sub)
    {
        return pair;
    }

    if let Some(captures) = SEPARATED_PAIR.captures(text)
        && let Some(pair) = parse_pair(&captures[1], &captures[2])
    {
        return pair;
    }

    if runs.len() >= 2
        && let Some(pair) = parse_pair(runs[0], runs[1])
    {
        return pair;
    }

    match text.trim().parse::<i64>() {
        Ok(sub) => MotivoCode::sub_only(sub),
        Err(_) => MotivoCode::ABSENT,
    }
}

fn parse_pair(main: &str, sub: &str) -> Option<MotivoCode> {
    Some(MotivoCode::pair(main.parse().ok()?, sub.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn separated_text() {
        assert_eq!(parse_motivo(&CellValue::text("8/29")), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::text("8-35")), MotivoCode::pair(8, 35));
        assert_eq!(parse_motivo(&CellValue::text(" 8 | 29 ")), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::text("Motivo 8 - 35")), MotivoCode::pair(8, 35));
    }

    #[test]
    fn year_prefixed_text() {
        assert_eq!(parse_motivo(&CellValue::text("2024-08-29")), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::text("1999 7 8 35")), MotivoCode::pair(8, 35));
        assert_eq!(
            parse_motivo(&CellValue::text("2024-08-35 00:00:00")),
            MotivoCode::pair(0, 0)
        );
        assert_eq!(
            parse_motivo(&CellValue::text("2024-08-29 00:00:00")),
            MotivoCode::pair(0, 0)
        );
    }

    #[test]
    fn loose_digit_runs() {
        assert_eq!(parse_motivo(&CellValue::text("8 29")), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::text("cod 8 sub 35")), MotivoCode::pair(8, 35));
    }

    #[test]
    fn single_value_text() {
        assert_eq!(parse_motivo(&CellValue::text(" 29 ")), MotivoCode::sub_only(29));
        assert_eq!(parse_motivo(&CellValue::text("motivo 8")), MotivoCode::ABSENT);
        assert_eq!(parse_motivo(&CellValue::text("sin motivo")), MotivoCode::ABSENT);
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_motivo(&CellValue::Number(829.0)), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::Number(835.0)), MotivoCode::pair(8, 35));
        assert_eq!(parse_motivo(&CellValue::Number(8.29)), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::Number(7.0)), MotivoCode::sub_only(7));
        assert_eq!(parse_motivo(&CellValue::Number(805.0)), MotivoCode::pair(8, 5));
    }

    #[test]
    fn dates_and_empty() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_motivo(&CellValue::DateTime(date)), MotivoCode::pair(8, 29));
        assert_eq!(parse_motivo(&CellValue::Empty), MotivoCode::ABSENT);
        assert_eq!(parse_motivo(&CellValue::text("  ")), MotivoCode::ABSENT);
    }
}
