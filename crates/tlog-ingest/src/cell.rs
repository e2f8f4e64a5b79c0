//! Conversion of Polars values into raw cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::{AnyValue, TimeUnit};
use tlog_model::CellValue;

/// Days from 0001-01-01 (CE day 1) to the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Map one Polars value onto a [`CellValue`].
///
/// Strings are kept untrimmed; emptiness is decided later by the normalizer.
pub fn cell_from_any(value: &AnyValue) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Empty,
        AnyValue::String(s) => CellValue::Text((*s).to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Int8(v) => CellValue::Number(f64::from(*v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(*v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(*v)),
        AnyValue::Int64(v) => CellValue::Number(*v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(*v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(*v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(*v)),
        AnyValue::UInt64(v) => CellValue::Number(*v as f64),
        AnyValue::Float32(v) => CellValue::Number(f64::from(*v)),
        AnyValue::Float64(v) => CellValue::Number(*v),
        AnyValue::Date(days) => date_from_epoch_days(*days)
            .map(|date| CellValue::DateTime(date.and_time(NaiveTime::MIN)))
            .unwrap_or_else(|| CellValue::Text(value.to_string())),
        AnyValue::Datetime(ts, unit, _) | AnyValue::DatetimeOwned(ts, unit, _) => {
            datetime_from_epoch(*ts, *unit)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(value.to_string()))
        }
        AnyValue::Time(nanos) => time_from_nanos(*nanos)
            .map(CellValue::TimeOfDay)
            .unwrap_or_else(|| CellValue::Text(value.to_string())),
        other => CellValue::Text(other.to_string()),
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

fn datetime_from_epoch(ts: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let datetime = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(ts)?,
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(ts)?,
        TimeUnit::Nanoseconds => DateTime::from_timestamp_nanos(ts),
    };
    Some(datetime.naive_utc())
}

fn time_from_nanos(nanos: i64) -> Option<NaiveTime> {
    let secs = u32::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
    let frac = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(cell_from_any(&AnyValue::Null), CellValue::Empty);
        assert_eq!(cell_from_any(&AnyValue::Int64(12)), CellValue::Number(12.0));
        assert_eq!(cell_from_any(&AnyValue::Float64(0.5)), CellValue::Number(0.5));
        assert_eq!(
            cell_from_any(&AnyValue::String(" IN1 ")),
            CellValue::Text(" IN1 ".to_string())
        );
    }

    #[test]
    fn test_date_becomes_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 29).unwrap();
        let days = (date - NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()).num_days() as i32;
        assert_eq!(
            cell_from_any(&AnyValue::Date(days)),
            CellValue::DateTime(date.and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_time_from_nanoseconds() {
        let nanos = (6 * 3600 + 5 * 60) * NANOS_PER_SECOND;
        assert_eq!(
            cell_from_any(&AnyValue::Time(nanos)),
            CellValue::TimeOfDay(NaiveTime::from_hms_opt(6, 5, 0).unwrap())
        );
    }

    #[test]
    fn test_datetime_units() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        let millis = expected.and_utc().timestamp_millis();
        assert_eq!(
            cell_from_any(&AnyValue::Datetime(millis, TimeUnit::Milliseconds, None)),
            CellValue::DateTime(expected)
        );
    }
}
