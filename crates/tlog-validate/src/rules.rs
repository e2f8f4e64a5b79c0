//! Incidence rule registry.
//!
//! Each incidence code maps to a pure function from a row to the issues it
//! raises. IN1 through IN5 are purely structural (which fields are required,
//! which must stay blank); IN2-IN4 add a departure-time comparison, and IN6
//! and IN7 carry their own logic.

use std::cmp::Ordering;

use tlog_model::{Field, IncidenceCode, MotivoCode, Row, ValidationIssue};
use tlog_normalize::{is_empty, parse_motivo, to_time_of_day};

/// Signature shared by every incidence rule.
pub type RuleFn = fn(&Row) -> Vec<ValidationIssue>;

/// Fields only meaningful when a unit is swapped mid-trip.
const UNIT_SWAP_FIELDS: &[Field] = &[Field::UnidadSaliente, Field::HoraCambio, Field::Parada];

/// The only fields an IN6 row may fill in.
const IN6_ALLOWED: &[Field] = &[
    Field::Recorrido,
    Field::Servicio,
    Field::SalidaProgramada,
    Field::Incidencia,
    Field::Motivo,
    Field::Observaciones,
];

/// Required/blank field layout of a structural rule.
struct Structure {
    label: &'static str,
    /// Schema fields exempt from the "required" check.
    optional: &'static [Field],
    /// Fields that must be blank.
    must_be_empty: &'static [Field],
}

impl Structure {
    fn check(&self, row: &Row) -> Vec<ValidationIssue> {
        let required = Field::all_except(self.optional);
        let mut issues = check_required(row, &required, self.label);
        issues.extend(check_must_be_empty(row, self.must_be_empty, self.label));
        issues
    }
}

const IN1: Structure = Structure {
    label: "IN1",
    optional: UNIT_SWAP_FIELDS,
    must_be_empty: &[Field::UnidadSaliente],
};

const IN2: Structure = Structure {
    label: "IN2",
    optional: UNIT_SWAP_FIELDS,
    must_be_empty: UNIT_SWAP_FIELDS,
};

const IN3: Structure = Structure {
    label: "IN3",
    optional: UNIT_SWAP_FIELDS,
    must_be_empty: UNIT_SWAP_FIELDS,
};

const IN4: Structure = Structure {
    label: "IN4",
    optional: UNIT_SWAP_FIELDS,
    must_be_empty: UNIT_SWAP_FIELDS,
};

const IN5: Structure = Structure {
    label: "IN5",
    optional: &[Field::Parada],
    must_be_empty: &[Field::Parada],
};

/// Rule registered for an incidence code.
pub fn rule_for(code: IncidenceCode) -> RuleFn {
    match code {
        IncidenceCode::In1 => rule_in1,
        IncidenceCode::In2 => rule_in2,
        IncidenceCode::In3 => rule_in3,
        IncidenceCode::In4 => rule_in4,
        IncidenceCode::In5 => rule_in5,
        IncidenceCode::In6 => rule_in6,
        IncidenceCode::In7 => rule_in7,
    }
}

/// Flag every listed field that is empty.
pub fn check_required(row: &Row, fields: &[Field], rule: &str) -> Vec<ValidationIssue> {
    fields
        .iter()
        .filter(|field| is_empty(row.get(**field)))
        .map(|field| ValidationIssue::new(*field, format!("{rule}: Campo obligatorio")))
        .collect()
}

/// Flag every listed field that is not empty.
pub fn check_must_be_empty(row: &Row, fields: &[Field], rule: &str) -> Vec<ValidationIssue> {
    fields
        .iter()
        .filter(|field| !is_empty(row.get(**field)))
        .map(|field| ValidationIssue::new(*field, format!("{rule}: Campo debe estar vacío")))
        .collect()
}

/// Compare actual against scheduled departure; issues land on "Salida real".
fn check_departure_order(row: &Row, rule: &str, expected: Ordering) -> Option<ValidationIssue> {
    let scheduled = to_time_of_day(row.get(Field::SalidaProgramada));
    let actual = to_time_of_day(row.get(Field::SalidaReal));
    let (Some(scheduled), Some(actual)) = (scheduled, actual) else {
        return Some(ValidationIssue::new(
            Field::SalidaReal,
            format!("{rule}: Salida real y programada deben ser válidas"),
        ));
    };
    if actual.cmp(&scheduled) == expected {
        return None;
    }
    let relation = match expected {
        Ordering::Less => "menor que",
        Ordering::Greater => "mayor que",
        Ordering::Equal => "igual a",
    };
    Some(ValidationIssue::new(
        Field::SalidaReal,
        format!("{rule}: Salida real debe ser {relation} Salida programada"),
    ))
}

/// IN1: everything but the unit-swap fields is required; no outgoing unit.
pub fn rule_in1(row: &Row) -> Vec<ValidationIssue> {
    IN1.check(row)
}

/// IN2 (early departure): actual departure strictly before scheduled.
pub fn rule_in2(row: &Row) -> Vec<ValidationIssue> {
    let mut issues = IN2.check(row);
    issues.extend(check_departure_order(row, IN2.label, Ordering::Less));
    issues
}

/// IN3 (late departure): actual departure strictly after scheduled.
pub fn rule_in3(row: &Row) -> Vec<ValidationIssue> {
    let mut issues = IN3.check(row);
    issues.extend(check_departure_order(row, IN3.label, Ordering::Greater));
    issues
}

/// IN4 applies the same late-departure comparison as IN3.
pub fn rule_in4(row: &Row) -> Vec<ValidationIssue> {
    let mut issues = IN4.check(row);
    issues.extend(check_departure_order(row, IN4.label, Ordering::Greater));
    issues
}

/// IN5: everything but "Parada" is required, and "Parada" stays blank.
pub fn rule_in5(row: &Row) -> Vec<ValidationIssue> {
    IN5.check(row)
}

/// IN6 (trip not run): only the allowed descriptive fields may hold data.
pub fn rule_in6(row: &Row) -> Vec<ValidationIssue> {
    Field::ALL
        .iter()
        .filter(|field| !IN6_ALLOWED.contains(field))
        .filter(|field| !is_empty(row.get(**field)))
        .map(|field| {
            ValidationIssue::new(
                *field,
                "IN6: Solo se permiten datos en Recorrido, Servicio, Salida programada, \
                 Incidencia, Motivo y Observaciones",
            )
        })
        .collect()
}

/// IN7 (unit change), refined by the reason code.
///
/// - 8-29: "Hora cambio" is required and must hold a valid time.
/// - 8-35: "Hora cambio" is not required and must be blank.
pub fn rule_in7(row: &Row) -> Vec<ValidationIssue> {
    let motivo = parse_motivo(row.get(Field::Motivo));
    let withdrawn = motivo == MotivoCode::UNIT_WITHDRAWN;

    // Both lists coincide: whatever IN7 leaves optional must also stay blank.
    let blank: &'static [Field] = if withdrawn {
        &[Field::UnidadSaliente, Field::HoraCambio]
    } else {
        &[Field::UnidadSaliente]
    };

    let mut issues = Structure {
        label: "IN7",
        optional: blank,
        must_be_empty: blank,
    }
    .check(row);

    // Presence is covered by the required check above.
    let change_time = row.get(Field::HoraCambio);
    if motivo == MotivoCode::UNIT_CHANGE
        && !is_empty(change_time)
        && to_time_of_day(change_time).is_none()
    {
        issues.push(ValidationIssue::new(
            Field::HoraCambio,
            "IN7: Hora cambio no es una hora válida",
        ));
    }
    issues
}

/// Rows without an incidence must depart exactly on schedule.
pub fn rule_no_incidence(row: &Row) -> Vec<ValidationIssue> {
    let scheduled = to_time_of_day(row.get(Field::SalidaProgramada));
    let actual = to_time_of_day(row.get(Field::SalidaReal));
    match (scheduled, actual) {
        (Some(scheduled), Some(actual)) if scheduled == actual => Vec::new(),
        (Some(_), Some(_)) => vec![ValidationIssue::new(
            Field::SalidaReal,
            "SP/SR: Salida programada debe ser igual a Salida real",
        )],
        _ => vec![ValidationIssue::new(
            Field::SalidaReal,
            "SP/SR: Salida programada y real deben existir y ser válidas",
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_rules_cover_expected_fields() {
        assert_eq!(Field::all_except(IN1.optional).len(), 12);
        assert_eq!(Field::all_except(IN5.optional).len(), 14);
        assert_eq!(IN2.must_be_empty, UNIT_SWAP_FIELDS);
    }

    #[test]
    fn every_code_has_a_rule() {
        let empty = Row::new();
        for code in IncidenceCode::ALL {
            let issues = rule_for(code)(&empty);
            if code == IncidenceCode::In6 {
                assert!(issues.is_empty());
            } else {
                assert!(!issues.is_empty(), "{code} should flag an empty row");
            }
        }
    }
}
