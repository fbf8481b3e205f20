//! Monthly goal derivation and achievement progress.
//!
//! A user may store an explicit monthly goal. When none is set (zero or
//! negative), a default is derived from the pay configuration: the monthly
//! salary itself, or for hourly employees the rate over a full default
//! month of full default days.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayPolicy;
use crate::models::{GoalProgress, PayConfiguration, PayType, RingSegment};

/// Derives the default monthly goal for a pay configuration.
///
/// - monthly pay: the monthly salary itself
/// - hourly pay: `pay_rate * default_daily_hours * default_workdays_per_month`
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::default_goal;
/// use attendance_engine::config::PayPolicy;
/// use attendance_engine::models::{PayConfiguration, PayType};
/// use rust_decimal::Decimal;
///
/// let pay = PayConfiguration {
///     pay_type: PayType::Hourly,
///     pay_rate: Decimal::from(2000),
/// };
/// let goal = default_goal(&pay, &PayPolicy::default());
/// assert_eq!(goal, Decimal::from(352000));
/// ```
pub fn default_goal(pay: &PayConfiguration, policy: &PayPolicy) -> Decimal {
    match pay.pay_type {
        PayType::Monthly => pay.pay_rate,
        PayType::Hourly => {
            pay.pay_rate
                * Decimal::from(policy.default_daily_hours)
                * Decimal::from(policy.default_workdays_per_month)
        }
    }
}

/// Returns the stored goal when it is positive, otherwise the derived
/// default for the pay configuration. Without a pay configuration the
/// stored value is returned as-is.
pub fn effective_goal(stored: Decimal, pay: Option<&PayConfiguration>, policy: &PayPolicy) -> Decimal {
    if stored > Decimal::ZERO {
        return stored;
    }
    match pay {
        Some(pay) => default_goal(pay, policy),
        None => stored,
    }
}

/// Computes achievement progress for an aggregate salary against a goal.
///
/// For a positive goal: `remaining = max(0, goal - achieved)` and the
/// percentage is `achieved / goal * 100` rounded to the nearest integer
/// (half away from zero); it may exceed 100 when the goal is surpassed.
/// The ring data carries an "achieved" and a "remaining" segment.
///
/// For a zero or negative goal there is no target, so the percentage is
/// undefined (`None`) and the ring collapses to a single "achieved"
/// segment of `max(achieved, 1)` so a chart never renders an empty ring.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::goal_progress;
/// use rust_decimal::Decimal;
///
/// let progress = goal_progress(Decimal::from(150000), Decimal::from(300000));
/// assert_eq!(progress.percentage, Some(50));
/// assert_eq!(progress.remaining, Decimal::from(150000));
/// ```
pub fn goal_progress(achieved: Decimal, goal: Decimal) -> GoalProgress {
    if goal <= Decimal::ZERO {
        return GoalProgress {
            goal,
            achieved,
            remaining: Decimal::ZERO,
            percentage: None,
            ring: vec![RingSegment {
                label: "achieved".to_string(),
                value: achieved.max(Decimal::ONE),
            }],
        };
    }

    let remaining = (goal - achieved).max(Decimal::ZERO);
    let percentage = (achieved / goal * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32();

    GoalProgress {
        goal,
        achieved,
        remaining,
        percentage,
        ring: vec![
            RingSegment {
                label: "achieved".to_string(),
                value: achieved,
            },
            RingSegment {
                label: "remaining".to_string(),
                value: remaining,
            },
        ],
    }
}
