//! Log export reading.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{read_log_csv, read_log_frame, rows_from_dataframe};
