use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A single rule violation on one field of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: Field,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
