//! Cell normalization for transit log auditing.
//!
//! - **Values** (`value`): emptiness, time-of-day, integer, real and minute
//!   conversions that never fail loudly; unparseable input yields `None`.
//! - **Reason codes** (`motivo`): recovers a (main, sub) pair from the many
//!   shapes operators type into the "Motivo" column.
//! - **Route keys** (`route`): canonical route names for limit-table lookups.

pub mod motivo;
pub mod route;
pub mod value;

pub use motivo::parse_motivo;
pub use route::normalize_route_key;
pub use value::{
    display_value, is_empty, normalize_incidence_code, parse_time_text, to_integer, to_minutes,
    to_real, to_time_of_day,
};
