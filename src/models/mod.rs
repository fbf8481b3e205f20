//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod derived;
mod month;
mod user;

pub use attendance::AttendanceRecord;
pub use derived::{
    DailyLine, DashboardEmployee, DashboardSummary, DerivedDailyInfo, GoalProgress,
    MonthlyStatement, PayrollLine, PayrollSummary, RingSegment,
};
pub use month::YearMonth;
pub use user::{PayConfiguration, PayType, Role, User};
