//! Attendance record model.
//!
//! This module defines the AttendanceRecord struct representing one day's
//! logged shift: date, start/end times of day, unpaid break minutes and a
//! free-text report.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single day's attendance entry for a user.
///
/// The date is a plain calendar date and the times are times of day with
/// minute precision; both are time-zone free so that derivation never
/// depends on the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The user this record belongs to.
    pub user_id: Uuid,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// The end time of the shift. An end time earlier than the start time
    /// means the shift crosses midnight.
    pub end_time: NaiveTime,
    /// Unpaid break minutes subtracted from the worked duration.
    pub break_minutes: u32,
    /// Free-text daily report submitted with the entry.
    #[serde(default)]
    pub report: String,
}

impl AttendanceRecord {
    /// Returns the start and end instants of the shift.
    ///
    /// Both instants are built by combining the record's date with its
    /// times of day. If the end instant is strictly earlier than the start
    /// instant the shift crosses midnight and the end is advanced by
    /// exactly one day. This is the only adjustment; shifts longer than
    /// 24 hours are not representable and not detected.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use uuid::Uuid;
    ///
    /// let record = AttendanceRecord {
    ///     id: Uuid::nil(),
    ///     user_id: Uuid::nil(),
    ///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     break_minutes: 0,
    ///     report: String::new(),
    /// };
    /// let (start, end) = record.shift_bounds();
    /// assert_eq!((end - start).num_hours(), 8);
    /// ```
    pub fn shift_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(self.start_time);
        let mut end = self.date.and_time(self.end_time);
        if end < start {
            end += Duration::days(1);
        }
        (start, end)
    }

    /// Returns the raw shift duration in minutes, before breaks.
    pub fn shift_minutes(&self) -> i64 {
        let (start, end) = self.shift_bounds();
        (end - start).num_minutes()
    }
}
