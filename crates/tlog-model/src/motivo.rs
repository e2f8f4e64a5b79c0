use std::fmt;

use serde::{Deserialize, Serialize};

/// A (main, sub) reason code parsed from the "Motivo" cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotivoCode {
    pub main: Option<i64>,
    pub sub: Option<i64>,
}

impl MotivoCode {
    /// Nothing could be recovered from the cell.
    pub const ABSENT: MotivoCode = MotivoCode {
        main: None,
        sub: None,
    };

    /// Reason 8-29: the unit was swapped and the change time must be recorded.
    pub const UNIT_CHANGE: MotivoCode = MotivoCode::pair(8, 29);

    /// Reason 8-35: the unit was withdrawn and no change time applies.
    pub const UNIT_WITHDRAWN: MotivoCode = MotivoCode::pair(8, 35);

    pub const fn pair(main: i64, sub: i64) -> Self {
        Self {
            main: Some(main),
            sub: Some(sub),
        }
    }

    /// Only a sub-code was recovered (e.g. a bare "29").
    pub const fn sub_only(sub: i64) -> Self {
        Self {
            main: None,
            sub: Some(sub),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.main.is_none() && self.sub.is_none()
    }
}

impl fmt::Display for MotivoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.main, self.sub) {
            (Some(main), Some(sub)) => write!(f, "{main}-{sub}"),
            (None, Some(sub)) => write!(f, "{sub}"),
            (Some(main), None) => write!(f, "{main}-"),
            (None, None) => f.write_str("-"),
        }
    }
}
