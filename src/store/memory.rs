//! In-memory users and attendance records.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, User, YearMonth};

/// Stores users and attendance records in process memory.
///
/// Insertion order is preserved for listings so that filtered views keep
/// a stable relative order. All reads hand out owned snapshots; the
/// derivation functions never see the store itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    records: Vec<AttendanceRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user and returns it with a freshly assigned id.
    pub fn add_user(&mut self, mut user: User) -> User {
        user.id = Uuid::new_v4();
        self.users.push(user.clone());
        user
    }

    /// Returns the user with the given id.
    pub fn user(&self, id: Uuid) -> EngineResult<User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(EngineError::UserNotFound { id })
    }

    /// Returns all users in insertion order.
    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Replaces the stored user with the same id.
    pub fn update_user(&mut self, user: User) -> EngineResult<User> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(EngineError::UserNotFound { id: user.id })?;
        *slot = user.clone();
        Ok(user)
    }

    /// Removes a user and all of their attendance records.
    pub fn delete_user(&mut self, id: Uuid) -> EngineResult<()> {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return Err(EngineError::UserNotFound { id });
        }
        self.records.retain(|r| r.user_id != id);
        Ok(())
    }

    /// Adds a record for an existing user and returns it with a freshly
    /// assigned id.
    pub fn add_record(&mut self, mut record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        self.user(record.user_id)?;
        record.id = Uuid::new_v4();
        self.records.push(record.clone());
        Ok(record)
    }

    /// Replaces the stored record with the same id, keeping its original
    /// owner.
    pub fn update_record(&mut self, record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(EngineError::RecordNotFound { id: record.id })?;
        let mut record = record;
        record.user_id = slot.user_id;
        *slot = record.clone();
        Ok(record)
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records.clone()
    }

    /// Returns one user's records, optionally narrowed to a month, in
    /// insertion order.
    pub fn records_for_user(
        &self,
        user_id: Uuid,
        month: Option<YearMonth>,
    ) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| month.is_none_or(|m| m.contains(r.date)))
            .cloned()
            .collect()
    }

    /// Returns every record of a month across all users, in insertion
    /// order.
    pub fn records_for_month(&self, month: YearMonth) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| month.contains(r.date))
            .cloned()
            .collect()
    }

    /// Returns a name lookup for report listings.
    pub fn user_names(&self) -> HashMap<Uuid, String> {
        self.users
            .iter()
            .map(|u| (u.id, u.name.clone()))
            .collect()
    }
}
