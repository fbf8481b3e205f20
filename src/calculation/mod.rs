//! Derivation logic for the attendance engine.
//!
//! This module contains the pure calculation functions: per-record worked
//! hours and daily salary, aggregate totals over a record slice, monthly
//! goal derivation and achievement progress, record filtering and sorting,
//! and the monthly/payroll/dashboard summaries built on top of them.
//!
//! Every function here is deterministic over its arguments: no wall-clock,
//! no locale, no shared state.

mod daily_info;
mod filter_sort;
mod goal;
mod summary;
mod totals;

pub use daily_info::calculate_daily_info;
pub use filter_sort::{SortField, SortOrder, filter_by_user_and_month, sort_records};
pub use goal::{default_goal, effective_goal, goal_progress};
pub use summary::{dashboard_summary, monthly_statement, payroll_summary};
pub use totals::{calculate_total_hours, calculate_total_salary};
