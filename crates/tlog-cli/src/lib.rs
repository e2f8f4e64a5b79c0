//! Library components of the `tlog` command-line auditor.

pub mod logging;
pub mod report;
