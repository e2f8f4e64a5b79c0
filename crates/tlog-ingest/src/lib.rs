//! Loading of operations log exports.
//!
//! The validation engine never touches the filesystem; this crate turns a CSV
//! export of the spreadsheet into a [`RowSet`](tlog_model::RowSet), loads the
//! optional cycle averages file, and applies the departure-window filter.

pub mod averages;
pub mod cell;
pub mod error;
pub mod export;
pub mod window;

pub use averages::load_cycle_averages;
pub use cell::cell_from_any;
pub use error::{IngestError, Result};
pub use export::{normalize_header, read_log_csv, read_log_frame, rows_from_dataframe};
pub use window::filter_departure_window;
