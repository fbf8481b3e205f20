//! Request types for the attendance engine API.
//!
//! Every payload is parsed and validated once here, at the boundary:
//! dates, times and months arrive as strings on the wire and become typed
//! values before any derivation sees them. Malformed input is rejected
//! with a 400; it can never reach the engine.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, PayConfiguration, PayType, Role, User};

/// Request body for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Application role.
    pub role: Role,
    /// Whether the rate is hourly or monthly.
    pub pay_type: PayType,
    /// The rate in whole currency units; must not be negative.
    pub pay_rate: Decimal,
    /// Optional monthly goal; omitted means "not set".
    #[serde(default)]
    pub goal: Option<Decimal>,
}

impl CreateUserRequest {
    /// Validates the boundary invariants.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pay_rate < Decimal::ZERO {
            return Err(EngineError::InvalidPayRate {
                value: self.pay_rate,
            });
        }
        Ok(())
    }
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User {
            id: Uuid::nil(),
            name: req.name,
            email: req.email,
            role: req.role,
            pay: PayConfiguration {
                pay_type: req.pay_type,
                pay_rate: req.pay_rate,
            },
            goal: req.goal.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Request body for `PUT /users/{id}`.
///
/// A full replacement of the mutable user fields, mirroring the admin
/// update surface of the backing API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Application role.
    pub role: Role,
    /// Whether the rate is hourly or monthly.
    pub pay_type: PayType,
    /// The rate in whole currency units; must not be negative.
    pub pay_rate: Decimal,
    /// Monthly goal; zero means "not set".
    #[serde(default)]
    pub goal: Option<Decimal>,
}

impl UpdateUserRequest {
    /// Validates the boundary invariants.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pay_rate < Decimal::ZERO {
            return Err(EngineError::InvalidPayRate {
                value: self.pay_rate,
            });
        }
        Ok(())
    }

    /// Applies this update to an existing user, keeping its id.
    pub fn apply_to(self, mut user: User) -> User {
        user.name = self.name;
        user.email = self.email;
        user.role = self.role;
        user.pay = PayConfiguration {
            pay_type: self.pay_type,
            pay_rate: self.pay_rate,
        };
        if let Some(goal) = self.goal {
            user.goal = goal;
        }
        user
    }
}

/// Request body for `POST /attendances`.
///
/// Start and end arrive as datetimes combined with the record date (the
/// wire format of the original clients); only their time-of-day is kept.
/// An end time earlier than the start time marks a shift that crosses
/// midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// The user the record belongs to.
    pub user_id: Uuid,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift.
    pub end_time: NaiveDateTime,
    /// Unpaid break minutes.
    pub break_minutes: u32,
    /// Free-text daily report.
    #[serde(default)]
    pub report: String,
}

impl From<CreateRecordRequest> for AttendanceRecord {
    fn from(req: CreateRecordRequest) -> Self {
        AttendanceRecord {
            id: Uuid::nil(),
            user_id: req.user_id,
            date: req.date,
            start_time: req.start_time.time(),
            end_time: req.end_time.time(),
            break_minutes: req.break_minutes,
            report: req.report,
        }
    }
}

/// Request body for `PUT /attendances/{id}`.
///
/// The record's owner is never changed by an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift.
    pub end_time: NaiveDateTime,
    /// Unpaid break minutes.
    pub break_minutes: u32,
    /// Free-text daily report.
    #[serde(default)]
    pub report: String,
}

impl UpdateRecordRequest {
    /// Builds the replacement record for the given id. The owner is
    /// restored by the store from the existing record.
    pub fn into_record(self, id: Uuid) -> AttendanceRecord {
        AttendanceRecord {
            id,
            user_id: Uuid::nil(),
            date: self.date,
            start_time: self.start_time.time(),
            end_time: self.end_time.time(),
            break_minutes: self.break_minutes,
            report: self.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_create_user_request() {
        let json = r#"{
            "name": "Tanaka Yuki",
            "email": "tanaka@example.com",
            "role": "USER",
            "pay_type": "HOURLY",
            "pay_rate": "1500"
        }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pay_type, PayType::Hourly);
        assert_eq!(request.pay_rate, Decimal::from(1500));
        assert!(request.goal.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_negative_rate() {
        let request = CreateUserRequest {
            name: "Tanaka".to_string(),
            email: "tanaka@example.com".to_string(),
            role: Role::User,
            pay_type: PayType::Hourly,
            pay_rate: Decimal::from_str("-1").unwrap(),
            goal: None,
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidPayRate { .. })
        ));
    }

    #[test]
    fn test_create_user_conversion_defaults_goal() {
        let request = CreateUserRequest {
            name: "Tanaka".to_string(),
            email: "tanaka@example.com".to_string(),
            role: Role::User,
            pay_type: PayType::Monthly,
            pay_rate: Decimal::from(330000),
            goal: None,
        };

        let user: User = request.into();
        assert_eq!(user.goal, Decimal::ZERO);
        assert_eq!(user.pay.pay_rate, Decimal::from(330000));
    }

    #[test]
    fn test_update_user_apply_keeps_id() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Old".to_string(),
            email: "old@example.com".to_string(),
            role: Role::User,
            pay: PayConfiguration {
                pay_type: PayType::Hourly,
                pay_rate: Decimal::from(1000),
            },
            goal: Decimal::from(100000),
        };
        let id = user.id;

        let request = UpdateUserRequest {
            name: "New".to_string(),
            email: "new@example.com".to_string(),
            role: Role::Admin,
            pay_type: PayType::Monthly,
            pay_rate: Decimal::from(330000),
            goal: None,
        };

        let updated = request.apply_to(user);
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.pay.pay_type, PayType::Monthly);
        // Omitted goal leaves the stored goal untouched.
        assert_eq!(updated.goal, Decimal::from(100000));
    }

    #[test]
    fn test_deserialize_create_record_request() {
        let json = r#"{
            "user_id": "00000000-0000-0000-0000-000000000000",
            "date": "2025-03-10",
            "start_time": "2025-03-10T09:00:00",
            "end_time": "2025-03-10T17:30:00",
            "break_minutes": 45,
            "report": "Wrote the monthly summary."
        }"#;

        let request: CreateRecordRequest = serde_json::from_str(json).unwrap();
        let record: AttendanceRecord = request.into();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(
            record.start_time,
            chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            record.end_time,
            chrono::NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert_eq!(record.break_minutes, 45);
    }

    #[test]
    fn test_record_conversion_keeps_only_time_of_day() {
        // Overnight entries are sent with both datetimes on the record's
        // date; the earlier end time encodes the midnight crossing.
        let json = r#"{
            "user_id": "00000000-0000-0000-0000-000000000000",
            "date": "2025-03-10",
            "start_time": "2025-03-10T22:00:00",
            "end_time": "2025-03-10T06:00:00",
            "break_minutes": 0
        }"#;

        let request: CreateRecordRequest = serde_json::from_str(json).unwrap();
        let record: AttendanceRecord = request.into();
        assert_eq!(record.shift_minutes(), 480);
    }

    #[test]
    fn test_update_record_into_record_sets_id() {
        let request = UpdateRecordRequest {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start_time: NaiveDateTime::parse_from_str(
                "2025-03-10 09:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            end_time: NaiveDateTime::parse_from_str("2025-03-10 17:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            break_minutes: 60,
            report: String::new(),
        };

        let id = Uuid::new_v4();
        let record = request.into_record(id);
        assert_eq!(record.id, id);
        assert_eq!(record.break_minutes, 60);
    }
}
