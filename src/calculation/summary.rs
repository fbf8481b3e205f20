//! Monthly, payroll and dashboard summaries.
//!
//! These functions assemble the per-record derivations into the views the
//! application presents: one user's statement for a month, the payroll
//! table over all employees for a month, and the all-time dashboard
//! aggregates. All of them take an explicit record snapshot and derive
//! every value through [`calculate_daily_info`].

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{
    AttendanceRecord, DailyLine, DashboardEmployee, DashboardSummary, MonthlyStatement,
    PayrollLine, PayrollSummary, User, YearMonth,
};

use super::daily_info::calculate_daily_info;
use super::filter_sort::{SortField, SortOrder, filter_by_user_and_month, sort_records};
use super::goal::{effective_goal, goal_progress};

/// Builds one user's derived statement for a month.
///
/// Records are filtered to the user and month, presented most recent day
/// first, and each line carries the derived worked hours and salary. The
/// totals feed goal progress against the user's effective goal (stored
/// goal, or the derived default when none is set).
pub fn monthly_statement(
    user: &User,
    records: &[AttendanceRecord],
    month: YearMonth,
    policy: &PayPolicy,
) -> MonthlyStatement {
    let mut filtered = filter_by_user_and_month(records, user.id, month);
    sort_records(
        &mut filtered,
        SortField::Date,
        SortOrder::Descending,
        Some(&user.pay),
        policy,
    );

    let days: Vec<DailyLine> = filtered
        .iter()
        .map(|record| {
            let info = calculate_daily_info(record, Some(&user.pay), policy);
            DailyLine {
                record_id: record.id,
                date: record.date,
                work_hours: info.work_hours,
                daily_salary: info.daily_salary,
                report: record.report.clone(),
            }
        })
        .collect();

    let total_hours: Decimal = days.iter().map(|d| d.work_hours).sum();
    let total_salary: Decimal = days.iter().map(|d| d.daily_salary).sum();

    let goal = effective_goal(user.goal, Some(&user.pay), policy);

    MonthlyStatement {
        user_id: user.id,
        month,
        days,
        total_hours,
        total_salary,
        goal: goal_progress(total_salary, goal),
    }
}

/// Builds the payroll table over all employees for a month.
///
/// Administrators are excluded; each employee line carries the monthly
/// totals derived from their own pay configuration, and `total_payroll`
/// is the sum over all lines.
pub fn payroll_summary(
    users: &[User],
    records: &[AttendanceRecord],
    month: YearMonth,
    policy: &PayPolicy,
) -> PayrollSummary {
    let mut employees = Vec::new();
    let mut total_payroll = Decimal::ZERO;

    for user in users.iter().filter(|u| u.is_employee()) {
        let filtered = filter_by_user_and_month(records, user.id, month);

        let mut total_hours = Decimal::ZERO;
        let mut total_salary = Decimal::ZERO;
        for record in &filtered {
            let info = calculate_daily_info(record, Some(&user.pay), policy);
            total_hours += info.work_hours;
            total_salary += info.daily_salary;
        }

        total_payroll += total_salary;
        employees.push(PayrollLine {
            user_id: user.id,
            name: user.name.clone(),
            pay_type: user.pay.pay_type,
            total_hours,
            total_salary,
        });
    }

    PayrollSummary {
        month,
        employees,
        total_payroll,
    }
}

/// Builds the all-time dashboard aggregates.
///
/// Covers every record of every employee, regardless of month.
pub fn dashboard_summary(
    users: &[User],
    records: &[AttendanceRecord],
    policy: &PayPolicy,
) -> DashboardSummary {
    let mut employees = Vec::new();
    let mut total_hours = Decimal::ZERO;
    let mut total_salary = Decimal::ZERO;

    for user in users.iter().filter(|u| u.is_employee()) {
        let mut user_hours = Decimal::ZERO;
        let mut user_salary = Decimal::ZERO;
        for record in records.iter().filter(|r| r.user_id == user.id) {
            let info = calculate_daily_info(record, Some(&user.pay), policy);
            user_hours += info.work_hours;
            user_salary += info.daily_salary;
        }

        total_hours += user_hours;
        total_salary += user_salary;
        employees.push(DashboardEmployee {
            user_id: user.id,
            name: user.name.clone(),
            total_hours: user_hours,
            total_salary: user_salary,
        });
    }

    DashboardSummary {
        total_hours,
        total_salary,
        active_employees: employees.len() as u32,
        employees,
    }
}
