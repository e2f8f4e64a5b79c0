//! The fixed column schema of a transit operations log.
//!
//! Every input row must expose these fifteen columns. Names are matched
//! exactly (case- and accent-sensitive) against the spreadsheet header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A column of the operations log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Recorrido")]
    Recorrido,
    #[serde(rename = "Servicio")]
    Servicio,
    #[serde(rename = "Unidad")]
    Unidad,
    #[serde(rename = "Salida programada")]
    SalidaProgramada,
    #[serde(rename = "Salida real")]
    SalidaReal,
    #[serde(rename = "Hora de llegada")]
    HoraLlegada,
    #[serde(rename = "Ciclo")]
    Ciclo,
    #[serde(rename = "Unidad saliente")]
    UnidadSaliente,
    #[serde(rename = "Hora cambio")]
    HoraCambio,
    #[serde(rename = "Parada")]
    Parada,
    #[serde(rename = "Incidencia")]
    Incidencia,
    #[serde(rename = "Motivo")]
    Motivo,
    #[serde(rename = "Código")]
    Codigo,
    #[serde(rename = "Conductor")]
    Conductor,
    #[serde(rename = "Observaciones")]
    Observaciones,
}

impl Field {
    /// All schema columns in spreadsheet order.
    pub const ALL: [Field; 15] = [
        Field::Recorrido,
        Field::Servicio,
        Field::Unidad,
        Field::SalidaProgramada,
        Field::SalidaReal,
        Field::HoraLlegada,
        Field::Ciclo,
        Field::UnidadSaliente,
        Field::HoraCambio,
        Field::Parada,
        Field::Incidencia,
        Field::Motivo,
        Field::Codigo,
        Field::Conductor,
        Field::Observaciones,
    ];

    /// Column header exactly as it appears in the spreadsheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Recorrido => "Recorrido",
            Field::Servicio => "Servicio",
            Field::Unidad => "Unidad",
            Field::SalidaProgramada => "Salida programada",
            Field::SalidaReal => "Salida real",
            Field::HoraLlegada => "Hora de llegada",
            Field::Ciclo => "Ciclo",
            Field::UnidadSaliente => "Unidad saliente",
            Field::HoraCambio => "Hora cambio",
            Field::Parada => "Parada",
            Field::Incidencia => "Incidencia",
            Field::Motivo => "Motivo",
            Field::Codigo => "Código",
            Field::Conductor => "Conductor",
            Field::Observaciones => "Observaciones",
        }
    }

    /// Schema position (0-based).
    pub fn index(&self) -> usize {
        Field::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or_default()
    }

    /// Every schema column except the listed ones, in schema order.
    pub fn all_except(excluded: &[Field]) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| !excluded.contains(field))
            .collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a header does not name a schema column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown column: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
