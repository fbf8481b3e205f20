//! Daily duration and salary derivation.
//!
//! This module derives worked hours and an estimated daily salary from a
//! single attendance record and a pay configuration.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{AttendanceRecord, DerivedDailyInfo, PayConfiguration, PayType};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Derives worked hours and estimated daily salary for one record.
///
/// The shift duration is taken from [`AttendanceRecord::shift_bounds`],
/// which advances an end time earlier than the start time by one day
/// (midnight-crossing shifts). Break minutes are subtracted and the result
/// is clamped at zero, so a break longer than the shift yields zero hours
/// rather than a negative duration.
///
/// Salary follows the pay type:
/// - hourly: `work_hours * pay_rate`
/// - monthly: `pay_rate / policy.monthly_divisor` for any day with
///   positive worked hours, zero otherwise. A worked day yields the full
///   daily share regardless of how many hours were worked.
///
/// A missing pay configuration degrades to the zero-valued result; this
/// function never fails. No rounding is applied; formatting is a
/// presentation concern of callers.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_daily_info;
/// use attendance_engine::config::PayPolicy;
/// use attendance_engine::models::{AttendanceRecord, PayConfiguration, PayType};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = AttendanceRecord {
///     id: Uuid::nil(),
///     user_id: Uuid::nil(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     break_minutes: 60,
///     report: String::new(),
/// };
/// let pay = PayConfiguration {
///     pay_type: PayType::Hourly,
///     pay_rate: Decimal::from(1500),
/// };
///
/// let info = calculate_daily_info(&record, Some(&pay), &PayPolicy::default());
/// assert_eq!(info.work_hours, Decimal::from(8));
/// assert_eq!(info.daily_salary, Decimal::from(12000));
/// ```
pub fn calculate_daily_info(
    record: &AttendanceRecord,
    pay: Option<&PayConfiguration>,
    policy: &PayPolicy,
) -> DerivedDailyInfo {
    let Some(pay) = pay else {
        return DerivedDailyInfo::zero();
    };

    let raw_hours = Decimal::from(record.shift_minutes()) / MINUTES_PER_HOUR;
    let break_hours = Decimal::from(record.break_minutes) / MINUTES_PER_HOUR;
    let work_hours = (raw_hours - break_hours).max(Decimal::ZERO);

    let daily_salary = match pay.pay_type {
        PayType::Hourly => work_hours * pay.pay_rate,
        PayType::Monthly => {
            if work_hours > Decimal::ZERO {
                pay.pay_rate / Decimal::from(policy.monthly_divisor)
            } else {
                Decimal::ZERO
            }
        }
    };

    DerivedDailyInfo {
        work_hours,
        daily_salary,
    }
}
