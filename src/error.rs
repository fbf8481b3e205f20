//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the store, the configuration
//! layer and the API boundary. The derivation functions themselves are
//! total and never return an error.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the attendance engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::PolicyNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A month string did not match the `YYYY-MM` format.
    #[error("Invalid month: {value}")]
    InvalidMonth {
        /// The rejected month string.
        value: String,
    },

    /// No user exists with the given id.
    #[error("User not found: {id}")]
    UserNotFound {
        /// The id that was not found.
        id: Uuid,
    },

    /// No attendance record exists with the given id.
    #[error("Attendance record not found: {id}")]
    RecordNotFound {
        /// The id that was not found.
        id: Uuid,
    },

    /// A pay rate was negative.
    #[error("Invalid pay rate: {value}")]
    InvalidPayRate {
        /// The rejected rate.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
