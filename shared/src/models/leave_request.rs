//! Leave Request Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LeaveType {
    #[serde(rename = "PAID")]
    Paid,
    #[serde(rename = "SICK")]
    Sick,
    #[serde(rename = "UNPAID")]
    Unpaid,
    #[serde(rename = "CASUAL")]
    Casual,
}

impl LeaveType {
    /// Human-readable label, used in reconciler notes and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Sick => "sick",
            Self::Unpaid => "unpaid",
            Self::Casual => "casual",
        }
    }
}

/// Leave request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LeaveStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Decision taken by an admin on a pending leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveAction {
    Approve,
    Reject,
}

impl LeaveAction {
    /// The status this action transitions the request to
    pub fn target_status(&self) -> LeaveStatus {
        match self {
            Self::Approve => LeaveStatus::Approved,
            Self::Reject => LeaveStatus::Rejected,
        }
    }
}

/// Leave request record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub leave_type: LeaveType,
    /// Inclusive range: start_date <= end_date
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
    pub status: LeaveStatus,
    pub admin_comment: Option<String>,
    /// Admin who decided the request, null until decided
    pub approved_by: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl LeaveRequest {
    /// Total leave days, inclusive of both endpoints
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether this leave overlaps the inclusive [start, end] range
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

/// Create leave request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestCreate {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
}

/// Decide leave request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDecision {
    pub action: LeaveAction,
    pub comment: Option<String>,
}
