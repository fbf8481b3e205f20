//! Aggregate totals over a record slice.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{AttendanceRecord, PayConfiguration};

use super::daily_info::calculate_daily_info;

/// Sums the estimated daily salary over all records in the slice.
///
/// Returns zero for an empty slice or an absent pay configuration. The
/// result is order-independent: it is a plain sum of per-record
/// derivations.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_total_salary;
/// use attendance_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
///
/// let total = calculate_total_salary(&[], None, &PayPolicy::default());
/// assert_eq!(total, Decimal::ZERO);
/// ```
pub fn calculate_total_salary(
    records: &[AttendanceRecord],
    pay: Option<&PayConfiguration>,
    policy: &PayPolicy,
) -> Decimal {
    records
        .iter()
        .map(|r| calculate_daily_info(r, pay, policy).daily_salary)
        .sum()
}

/// Sums the worked hours over all records in the slice.
///
/// Follows the same contract as [`calculate_total_salary`]: zero for an
/// empty slice or an absent pay configuration, order-independent.
pub fn calculate_total_hours(
    records: &[AttendanceRecord],
    pay: Option<&PayConfiguration>,
    policy: &PayPolicy,
) -> Decimal {
    records
        .iter()
        .map(|r| calculate_daily_info(r, pay, policy).work_hours)
        .sum()
}
