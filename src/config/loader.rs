//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the payroll
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayPolicy;

/// Loads the payroll policy from a YAML file.
///
/// # File format
///
/// ```text
/// config/payroll/policy.yaml
/// ```
///
/// ```yaml
/// monthly_divisor: 22
/// default_daily_hours: 8
/// default_workdays_per_month: 22
/// ```
///
/// Omitted keys fall back to the compiled-in defaults.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/payroll/policy.yaml").unwrap();
/// println!("Monthly divisor: {}", policy.monthly_divisor);
/// ```
pub struct PolicyLoader;

impl PolicyLoader {
    /// Loads a policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/payroll/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed [`PayPolicy`] on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<PayPolicy> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads a policy from the given file if it exists, falling back to
    /// the compiled-in defaults when it does not. A file that exists but
    /// fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<PayPolicy> {
        match Self::load(&path) {
            Ok(policy) => Ok(policy),
            Err(EngineError::PolicyNotFound { .. }) => Ok(PayPolicy::default()),
            Err(e) => Err(e),
        }
    }
}
