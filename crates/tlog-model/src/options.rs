//! Configuration options for a validation pass.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Field-level data-entry detectors that may run after the incidence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityCheck {
    /// Placeholder tokens such as "N/A" or "POR LLENAR".
    Placeholders,
    /// Leading or trailing whitespace in text cells.
    ExtraSpaces,
    /// Symbols in identifier-like columns.
    InvalidCharacters,
    /// Out-of-range service, unit and code numbers.
    NumericRange,
    /// Implausible driver names and reason text.
    TextQuality,
}

impl QualityCheck {
    pub const ALL: [QualityCheck; 5] = [
        QualityCheck::Placeholders,
        QualityCheck::ExtraSpaces,
        QualityCheck::InvalidCharacters,
        QualityCheck::NumericRange,
        QualityCheck::TextQuality,
    ];
}

/// Inclusive range of scheduled departure times to keep on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DepartureWindow {
    /// Returns `None` when `start` is after `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Morning shift: 04:50 through 14:00.
impl Default for DepartureWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(4, 50, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl fmt::Display for DepartureWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Parses `HH:MM-HH:MM`.
impl FromStr for DepartureWindow {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OptionsError::InvalidWindow {
            value: s.to_string(),
        };
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").map_err(|_| invalid())?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").map_err(|_| invalid())?;
        DepartureWindow::new(start, end).ok_or_else(invalid)
    }
}

/// Options controlling a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Extra detectors appended after the incidence rules. Empty by default.
    pub quality_checks: Vec<QualityCheck>,
    /// Keep only rows scheduled inside this window when loading.
    pub departure_window: Option<DepartureWindow>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quality_checks(mut self, checks: impl IntoIterator<Item = QualityCheck>) -> Self {
        self.quality_checks = checks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_departure_window(mut self, window: Option<DepartureWindow>) -> Self {
        self.departure_window = window;
        self
    }
}
