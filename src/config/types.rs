//! Payroll policy types.

use serde::{Deserialize, Serialize};

/// The constants driving salary estimation.
///
/// Every value has a compiled-in default matching the application's
/// canonical assumptions: a monthly salary is apportioned over 22 working
/// days, and the default goal for hourly employees assumes an 8-hour day
/// over those 22 days. Derivation stays deterministic because the policy
/// is fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayPolicy {
    /// Working days a monthly salary is divided over.
    pub monthly_divisor: u32,
    /// Assumed hours per working day for default-goal derivation.
    pub default_daily_hours: u32,
    /// Assumed working days per month for default-goal derivation.
    pub default_workdays_per_month: u32,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            monthly_divisor: 22,
            default_daily_hours: 8,
            default_workdays_per_month: 22,
        }
    }
}
