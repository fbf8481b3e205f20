//! Record filtering and sorting.
//!
//! Filtering selects one user's records for one calendar month; sorting
//! orders a filtered snapshot by date or by a derived field. Both are
//! stateless transforms over immutable input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayPolicy;
use crate::models::{AttendanceRecord, PayConfiguration, YearMonth};

use super::daily_info::calculate_daily_info;

/// The field a record listing is ordered by.
///
/// `WorkHours` and `DailySalary` order by values derived against the
/// displayed user's pay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Order by calendar date.
    Date,
    /// Order by derived worked hours.
    WorkHours,
    /// Order by derived daily salary.
    DailySalary,
}

impl Default for SortField {
    fn default() -> Self {
        Self::Date
    }
}

/// The direction a record listing is ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first. The default for date listings: most recent day on
    /// top.
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Descending
    }
}

/// Filters a record snapshot down to one user and one calendar month.
///
/// Dates are compared as plain calendar values via [`YearMonth::contains`],
/// so the result can never be shifted by a time zone. The relative input
/// order of the surviving records is preserved.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::filter_by_user_and_month;
/// use attendance_engine::models::YearMonth;
/// use uuid::Uuid;
///
/// let month = YearMonth::new(2025, 3).unwrap();
/// let filtered = filter_by_user_and_month(&[], Uuid::nil(), month);
/// assert!(filtered.is_empty());
/// ```
pub fn filter_by_user_and_month(
    records: &[AttendanceRecord],
    user_id: Uuid,
    month: YearMonth,
) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.user_id == user_id && month.contains(r.date))
        .cloned()
        .collect()
}

/// Sorts records in place by the given field and order.
///
/// The sort is stable: records comparing equal keep their input order.
/// Derived fields are computed against the given pay configuration; with
/// no configuration every derived key is zero and the input order is the
/// result.
pub fn sort_records(
    records: &mut [AttendanceRecord],
    field: SortField,
    order: SortOrder,
    pay: Option<&PayConfiguration>,
    policy: &PayPolicy,
) {
    // A descending sort uses a reversed comparator rather than reversing
    // the sorted slice, so ties still keep their input order.
    let ordered = |ordering: std::cmp::Ordering| match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    };

    match field {
        SortField::Date => records.sort_by(|a, b| ordered(a.date.cmp(&b.date))),
        SortField::WorkHours => records.sort_by(|a, b| {
            let a_hours = calculate_daily_info(a, pay, policy).work_hours;
            let b_hours = calculate_daily_info(b, pay, policy).work_hours;
            ordered(a_hours.cmp(&b_hours))
        }),
        SortField::DailySalary => records.sort_by(|a, b| {
            let a_salary = calculate_daily_info(a, pay, policy).daily_salary;
            let b_salary = calculate_daily_info(b, pay, policy).daily_salary;
            ordered(a_salary.cmp(&b_salary))
        }),
    }
}
