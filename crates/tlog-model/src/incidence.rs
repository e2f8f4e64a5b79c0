use std::fmt;

use serde::{Deserialize, Serialize};

/// Registered incidence codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IncidenceCode {
    In1,
    In2,
    In3,
    In4,
    In5,
    In6,
    In7,
}

impl IncidenceCode {
    pub const ALL: [IncidenceCode; 7] = [
        IncidenceCode::In1,
        IncidenceCode::In2,
        IncidenceCode::In3,
        IncidenceCode::In4,
        IncidenceCode::In5,
        IncidenceCode::In6,
        IncidenceCode::In7,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidenceCode::In1 => "IN1",
            IncidenceCode::In2 => "IN2",
            IncidenceCode::In3 => "IN3",
            IncidenceCode::In4 => "IN4",
            IncidenceCode::In5 => "IN5",
            IncidenceCode::In6 => "IN6",
            IncidenceCode::In7 => "IN7",
        }
    }

    /// Exact lookup of an already-normalized code.
    pub fn from_code(code: &str) -> Option<Self> {
        IncidenceCode::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == code)
    }
}

impl fmt::Display for IncidenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a row by its "Incidencia" cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Incidence {
    /// Empty cell: the row reports no incidence.
    None,
    /// One of IN1..IN7.
    Registered(IncidenceCode),
    /// Non-empty code matching no registered rule (e.g. a typo such as "INX").
    Unregistered(String),
}

impl Incidence {
    /// Classify a normalized (upper-cased, 3-character) code.
    pub fn from_normalized(code: &str) -> Self {
        if code.is_empty() {
            return Incidence::None;
        }
        match IncidenceCode::from_code(code) {
            Some(code) => Incidence::Registered(code),
            None => Incidence::Unregistered(code.to_string()),
        }
    }

    pub fn code(&self) -> Option<IncidenceCode> {
        match self {
            Incidence::Registered(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is(&self, code: IncidenceCode) -> bool {
        self.code() == Some(code)
    }
}

impl fmt::Display for Incidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incidence::None => f.write_str("NONE"),
            Incidence::Registered(code) => f.write_str(code.as_str()),
            Incidence::Unregistered(code) => f.write_str(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_registered_empty_and_unknown_codes() {
        assert_eq!(Incidence::from_normalized(""), Incidence::None);
        assert_eq!(
            Incidence::from_normalized("IN7"),
            Incidence::Registered(IncidenceCode::In7)
        );
        assert_eq!(
            Incidence::from_normalized("INX"),
            Incidence::Unregistered("INX".to_string())
        );
        assert!(Incidence::from_normalized("IN6").is(IncidenceCode::In6));
    }
}
