//! User model and pay configuration types.
//!
//! This module defines the User struct along with the Role, PayType and
//! PayConfiguration types that drive salary derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents how a user is compensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayType {
    /// Wage per hour actually worked.
    Hourly,
    /// Fixed monthly salary, apportioned per working day.
    Monthly,
}

/// Represents a user's role in the application.
///
/// Roles do not influence derivation; they exist so the store can
/// distinguish administrators from employees when aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Administrator: reviews aggregates and manages accounts.
    Admin,
    /// Regular employee: logs attendance and reports.
    User,
}

/// Pay configuration attached to a user.
///
/// Invariant: `pay_rate >= 0`, enforced at the API boundary.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{PayConfiguration, PayType};
/// use rust_decimal::Decimal;
///
/// let pay = PayConfiguration {
///     pay_type: PayType::Hourly,
///     pay_rate: Decimal::from(1500),
/// };
/// assert_eq!(pay.pay_type, PayType::Hourly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayConfiguration {
    /// Whether the rate is hourly or monthly.
    pub pay_type: PayType,
    /// The rate in whole currency units.
    pub pay_rate: Decimal,
}

/// Represents a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address used as the login identity by the backend.
    pub email: String,
    /// Application role.
    pub role: Role,
    /// Pay configuration used for salary derivation.
    #[serde(flatten)]
    pub pay: PayConfiguration,
    /// Monthly goal in whole currency units. Zero or negative means
    /// "not set" and triggers default-goal derivation.
    pub goal: Decimal,
}

impl User {
    /// Returns true if this account is an active employee rather than an
    /// administrator.
    pub fn is_employee(&self) -> bool {
        self.role == Role::User
    }
}
