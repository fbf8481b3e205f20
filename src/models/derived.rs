//! Derived result models for the attendance engine.
//!
//! Everything in this module is computed fresh from an attendance-record
//! snapshot and a pay configuration; nothing here is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayType, YearMonth};

/// Worked hours and estimated salary derived from a single record.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DerivedDailyInfo;
/// use rust_decimal::Decimal;
///
/// let info = DerivedDailyInfo::zero();
/// assert_eq!(info.work_hours, Decimal::ZERO);
/// assert_eq!(info.daily_salary, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedDailyInfo {
    /// Worked hours after subtracting breaks, clamped at zero.
    pub work_hours: Decimal,
    /// Estimated salary for the day in whole currency units.
    pub daily_salary: Decimal,
}

impl DerivedDailyInfo {
    /// The zero-valued result used when derivation has nothing to work
    /// with (missing pay configuration).
    pub fn zero() -> Self {
        Self {
            work_hours: Decimal::ZERO,
            daily_salary: Decimal::ZERO,
        }
    }
}

/// One row of a monthly statement: a record plus its derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLine {
    /// The id of the underlying attendance record.
    pub record_id: Uuid,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Worked hours for the day.
    pub work_hours: Decimal,
    /// Estimated salary for the day.
    pub daily_salary: Decimal,
    /// The free-text report submitted with the entry.
    pub report: String,
}

/// A single segment of the goal achievement ring chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    /// Segment label, either "achieved" or "remaining".
    pub label: String,
    /// Segment value in whole currency units.
    pub value: Decimal,
}

/// Progress toward a monthly goal.
///
/// When no positive goal is in effect the percentage is undefined
/// (serialized as `null`) and the ring collapses to a single "achieved"
/// segment so charts never render a degenerate empty ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The goal the progress is measured against.
    pub goal: Decimal,
    /// Aggregate salary achieved so far.
    pub achieved: Decimal,
    /// Currency units still missing, clamped at zero.
    pub remaining: Decimal,
    /// Achievement percentage rounded to the nearest integer; may exceed
    /// 100. `None` when no positive goal is set.
    pub percentage: Option<u32>,
    /// Ring chart segments derived from achieved/remaining.
    pub ring: Vec<RingSegment>,
}

/// A user's derived attendance statement for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatement {
    /// The user the statement belongs to.
    pub user_id: Uuid,
    /// The month the statement covers.
    pub month: YearMonth,
    /// Per-day derived lines, most recent first.
    pub days: Vec<DailyLine>,
    /// Total worked hours over the month.
    pub total_hours: Decimal,
    /// Total estimated salary over the month.
    pub total_salary: Decimal,
    /// Progress toward the user's effective monthly goal.
    pub goal: GoalProgress,
}

/// One employee's payroll line for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The employee's user id.
    pub user_id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The employee's pay type.
    pub pay_type: PayType,
    /// Total worked hours for the month.
    pub total_hours: Decimal,
    /// Total estimated salary for the month.
    pub total_salary: Decimal,
}

/// Payroll totals for all employees for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The month the payroll covers.
    pub month: YearMonth,
    /// Per-employee lines.
    pub employees: Vec<PayrollLine>,
    /// Sum of all employee salaries for the month.
    pub total_payroll: Decimal,
}

/// One employee's all-time aggregate for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEmployee {
    /// The employee's user id.
    pub user_id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// Total worked hours across all records.
    pub total_hours: Decimal,
    /// Total estimated salary across all records.
    pub total_salary: Decimal,
}

/// All-time aggregates shown on the administrator dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total worked hours across all employees.
    pub total_hours: Decimal,
    /// Total estimated salary across all employees.
    pub total_salary: Decimal,
    /// Number of accounts with the USER role.
    pub active_employees: u32,
    /// Per-employee aggregates.
    pub employees: Vec<DashboardEmployee>,
}
