//! Profile Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder used for job fields until HR assigns real values
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Employment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EmploymentType {
    #[serde(rename = "FULL_TIME")]
    FullTime,
    #[serde(rename = "PART_TIME")]
    PartTime,
    #[serde(rename = "CONTRACT")]
    Contract,
    #[serde(rename = "INTERN")]
    Intern,
}

impl Default for EmploymentType {
    fn default() -> Self {
        Self::FullTime
    }
}

/// Profile record - job metadata and personal contact fields, 1:1 with Employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Profile {
    pub id: i64,
    pub employee_id: i64,
    pub designation: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub employment_type: EmploymentType,
    /// Personal information (editable by the employee)
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Update profile payload (admin edits job fields, employee edits contact fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub designation: Option<String>,
    pub department: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub employment_type: Option<EmploymentType>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}
