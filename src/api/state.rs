//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::PayPolicy;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains the payroll policy and the in-memory record store. The store
/// sits behind an async `RwLock`; handlers take a short-lived guard and
/// never hold it across I/O.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PayPolicy>,
    store: Arc<RwLock<MemoryStore>>,
}

impl AppState {
    /// Creates a new application state with the given policy and an
    /// empty store.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Returns the shared record store.
    pub fn store(&self) -> &RwLock<MemoryStore> {
        &self.store
    }
}
