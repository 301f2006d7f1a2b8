//! Attendance Model

use crate::money::round_hours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AttendanceStatus {
    #[serde(rename = "PRESENT")]
    Present,
    #[serde(rename = "ABSENT")]
    Absent,
    #[serde(rename = "HALF_DAY")]
    HalfDay,
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        Self::Absent
    }
}

impl AttendanceStatus {
    /// Status determined by worked hours: >= 8 present, >= 4 half-day,
    /// anything less counts as absent.
    pub fn from_hours(hours: f64) -> Self {
        if hours >= 8.0 {
            Self::Present
        } else if hours >= 4.0 {
            Self::HalfDay
        } else {
            Self::Absent
        }
    }
}

/// Attendance record - one row per (employee, calendar day)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    /// Check-in timestamp (Unix millis), set once
    pub check_in_time: Option<i64>,
    /// Check-out timestamp (Unix millis), set once after check-in
    pub check_out_time: Option<i64>,
    pub status: AttendanceStatus,
    /// Worked hours, 2 decimal places, derived at check-out
    pub total_hours: f64,
    pub notes: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Derive worked hours and status from a check-in/check-out timestamp pair.
///
/// Hours are the elapsed seconds divided by 3600, rounded to 2 decimals.
/// This derivation overwrites whatever status check-in set provisionally.
pub fn derive_hours_and_status(check_in_millis: i64, check_out_millis: i64) -> (f64, AttendanceStatus) {
    let raw_hours = (check_out_millis - check_in_millis) as f64 / 3_600_000.0;
    let hours = round_hours(raw_hours.max(0.0));
    (hours, AttendanceStatus::from_hours(hours))
}
