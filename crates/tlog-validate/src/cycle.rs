//! Cycle-duration checks: per-route averages and the built-in limit table.

use tlog_model::{CycleAverages, Field, Incidence, IncidenceCode, Row, ValidationIssue, format_numeric};
use tlog_normalize::{display_value, normalize_route_key, to_minutes, to_real};

use crate::limits::route_limit;

/// Compare "Ciclo" against the average configured for the row's route.
///
/// Routes are matched on their trimmed display text, without key
/// normalization. Rows whose route has no average are not checked.
pub fn check_cycle_average(row: &Row, averages: &CycleAverages) -> Vec<ValidationIssue> {
    let route = display_value(row.get(Field::Recorrido));
    let route = route.trim();
    if route.is_empty() {
        return Vec::new();
    }
    let Some(average) = averages.get(route) else {
        return Vec::new();
    };
    let allowed = format_numeric(average);
    match to_real(row.get(Field::Ciclo)) {
        None => vec![ValidationIssue::new(
            Field::Ciclo,
            format!("Ciclo inválido; promedio permitido {allowed} para Recorrido {route}"),
        )],
        Some(cycle) if cycle > average => vec![ValidationIssue::new(
            Field::Ciclo,
            format!(
                "Ciclo {} supera promedio permitido {allowed} para Recorrido {route}",
                format_numeric(cycle)
            ),
        )],
        Some(_) => Vec::new(),
    }
}

/// Compare "Ciclo", read as minutes, against the route's built-in limit.
///
/// IN6 rows (trip not run) and routes absent from the table are skipped.
pub fn check_cycle_limit(row: &Row, incidence: &Incidence) -> Vec<ValidationIssue> {
    if incidence.is(IncidenceCode::In6) {
        return Vec::new();
    }
    let route = display_value(row.get(Field::Recorrido));
    let route = route.trim();
    let Some(limit) = route_limit(&normalize_route_key(route)) else {
        return Vec::new();
    };
    match to_minutes(row.get(Field::Ciclo)) {
        None => vec![ValidationIssue::new(
            Field::Ciclo,
            format!("Ciclo inválido; límite {limit} para Recorrido {route}"),
        )],
        Some(minutes) if minutes > limit.as_minutes() => vec![ValidationIssue::new(
            Field::Ciclo,
            format!(
                "Ciclo {} min supera límite {limit} para Recorrido {route}",
                format_numeric(minutes)
            ),
        )],
        Some(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages() -> CycleAverages {
        [("Ruta 1", 45.0)].into_iter().collect()
    }

    #[test]
    fn average_is_an_inclusive_ceiling() {
        let row = Row::new().with(Field::Recorrido, " Ruta 1 ").with(Field::Ciclo, 45.0);
        assert!(check_cycle_average(&row, &averages()).is_empty());

        let row = Row::new().with(Field::Recorrido, "Ruta 1").with(Field::Ciclo, "50");
        let issues = check_cycle_average(&row, &averages());
        assert_eq!(
            issues[0].message,
            "Ciclo 50 supera promedio permitido 45 para Recorrido Ruta 1"
        );
    }

    #[test]
    fn average_lookup_is_exact() {
        let row = Row::new().with(Field::Recorrido, "ruta 1").with(Field::Ciclo, 90.0);
        assert!(check_cycle_average(&row, &averages()).is_empty());
    }

    #[test]
    fn unreadable_cycle_is_flagged_against_average() {
        let row = Row::new().with(Field::Recorrido, "Ruta 1").with(Field::Ciclo, "abc");
        let issues = check_cycle_average(&row, &averages());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Ciclo);
    }

    #[test]
    fn limit_skips_trips_not_run() {
        let row = Row::new().with(Field::Recorrido, "T1 - Playita").with(Field::Ciclo, "00:45");
        let in6 = Incidence::Registered(IncidenceCode::In6);
        assert!(check_cycle_limit(&row, &in6).is_empty());
        assert_eq!(check_cycle_limit(&row, &Incidence::None).len(), 1);
    }
}
