//! Payroll policy configuration for the attendance engine.
//!
//! This module provides the estimation constants (monthly pay divisor,
//! default workday length, default workdays per month) with compiled-in
//! defaults and an optional YAML override file.
//!
//! # Example
//!
//! ```
//! use attendance_engine::config::PayPolicy;
//!
//! let policy = PayPolicy::default();
//! assert_eq!(policy.monthly_divisor, 22);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::PayPolicy;
