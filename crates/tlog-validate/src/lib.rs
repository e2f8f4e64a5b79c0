//! Incidence validation engine for transit operations logs.
//!
//! Two passes are available over a [`RowSet`](tlog_model::RowSet):
//!
//! - [`validate_rows`]: per-incidence field rules, optional cycle averages and
//!   optional data-entry quality checks.
//! - [`validate_cycles`]: cycle durations against the built-in route limits.
//!
//! Both return only the rows that raised at least one issue.

pub mod cycle;
pub mod engine;
pub mod limits;
pub mod quality;
pub mod rules;

pub use cycle::{check_cycle_average, check_cycle_limit};
pub use engine::{
    RowOutcome, build_result, classify_incidence, evaluate_row, evaluate_row_cycles, rule_issues,
    validate_cycles, validate_rows, validate_rows_with_options,
};
pub use limits::{RouteLimit, route_cycle_limits, route_limit};
pub use quality::run_checks;
pub use rules::{RuleFn, check_must_be_empty, check_required, rule_for, rule_no_incidence};
