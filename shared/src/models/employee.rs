//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Role {
    /// Admin/HR officer
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "EMPLOYEE")]
    Employee,
}

impl Default for Role {
    fn default() -> Self {
        Self::Employee
    }
}

/// Check if the role is admin/HR officer
pub fn is_admin(role: Role) -> bool {
    role == Role::Admin
}

/// Check if the role is a regular employee
pub fn is_employee(role: Role) -> bool {
    role == Role::Employee
}

/// Employee record - the identity anchor owning all HR ledgers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    /// Human-facing employee ID (EMP followed by 4-6 digits)
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    /// Whether the employee's email address has been verified
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    /// Human-facing employee ID (EMP followed by 4-6 digits)
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_predicates() {
        assert!(is_admin(Role::Admin));
        assert!(!is_admin(Role::Employee));
        assert!(is_employee(Role::Employee));
        assert!(!is_employee(Role::Admin));
    }
}
