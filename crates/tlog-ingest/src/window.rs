//! Scheduled-departure window filter applied after loading.

use tlog_model::{DepartureWindow, Field, RowSet};
use tlog_normalize::to_time_of_day;

/// Keep only rows whose scheduled departure falls inside `window`.
///
/// Rows with no readable scheduled time are dropped. The result is
/// re-indexed, so reported row numbers refer to the filtered set.
pub fn filter_departure_window(rows: RowSet, window: DepartureWindow) -> RowSet {
    let before = rows.len();
    let RowSet { headers, rows } = rows;
    let kept: Vec<_> = rows
        .into_iter()
        .filter(|row| {
            to_time_of_day(row.get(Field::SalidaProgramada)).is_some_and(|time| window.contains(time))
        })
        .collect();
    tracing::debug!(
        %window,
        before,
        after = kept.len(),
        "departure window applied"
    );
    RowSet::new(headers, kept)
}
