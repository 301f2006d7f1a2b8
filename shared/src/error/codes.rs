//! Unified error codes for the Dayflow HRMS core
//!
//! This module defines all error codes used across the core and its callers.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Employee errors
//! - 2xxx: Permission errors
//! - 3xxx: Attendance errors
//! - 4xxx: Leave errors
//! - 5xxx: Payroll errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 1001,
    /// Employee ID already registered
    EmployeeIdExists = 1002,
    /// Employee ID does not match the required format
    InvalidEmployeeId = 1003,
    /// Email already registered
    EmailExists = 1004,
    /// Email not verified
    EmailNotVerified = 1005,
    /// Profile not found
    ProfileNotFound = 1101,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin/HR role required
    AdminRequired = 2003,

    // ==================== 3xxx: Attendance ====================
    /// Attendance record not found
    AttendanceNotFound = 3001,
    /// Already checked in today
    AlreadyCheckedIn = 3002,
    /// Already checked out today
    AlreadyCheckedOut = 3003,
    /// Check-out attempted before check-in
    NotCheckedInYet = 3004,

    // ==================== 4xxx: Leave ====================
    /// Leave request not found
    LeaveNotFound = 4001,
    /// Leave start date is after the end date
    InvalidLeaveRange = 4002,

    // ==================== 5xxx: Payroll ====================
    /// Payroll record not found
    PayrollNotFound = 5001,
    /// Salary component must not be negative
    NegativeSalaryComponent = 5002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeIdExists => "This employee ID is already registered",
            ErrorCode::InvalidEmployeeId => {
                "Employee ID must be in format: EMP followed by 4-6 digits"
            }
            ErrorCode::EmailExists => "This email is already registered",
            ErrorCode::EmailNotVerified => "Email not verified",
            ErrorCode::ProfileNotFound => "Profile not found",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Admin/HR role is required",

            // Attendance
            ErrorCode::AttendanceNotFound => "Attendance record not found",
            ErrorCode::AlreadyCheckedIn => "You have already checked in today",
            ErrorCode::AlreadyCheckedOut => "You have already checked out today",
            ErrorCode::NotCheckedInYet => "Please check in first",

            // Leave
            ErrorCode::LeaveNotFound => "Leave request not found",
            ErrorCode::InvalidLeaveRange => "End date must be after start date",

            // Payroll
            ErrorCode::PayrollNotFound => "Payroll record not found",
            ErrorCode::NegativeSalaryComponent => "Salary components must not be negative",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Employee
            1001 => Ok(ErrorCode::EmployeeNotFound),
            1002 => Ok(ErrorCode::EmployeeIdExists),
            1003 => Ok(ErrorCode::InvalidEmployeeId),
            1004 => Ok(ErrorCode::EmailExists),
            1005 => Ok(ErrorCode::EmailNotVerified),
            1101 => Ok(ErrorCode::ProfileNotFound),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Attendance
            3001 => Ok(ErrorCode::AttendanceNotFound),
            3002 => Ok(ErrorCode::AlreadyCheckedIn),
            3003 => Ok(ErrorCode::AlreadyCheckedOut),
            3004 => Ok(ErrorCode::NotCheckedInYet),

            // Leave
            4001 => Ok(ErrorCode::LeaveNotFound),
            4002 => Ok(ErrorCode::InvalidLeaveRange),

            // Payroll
            5001 => Ok(ErrorCode::PayrollNotFound),
            5002 => Ok(ErrorCode::NegativeSalaryComponent),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::EmployeeNotFound,
            ErrorCode::AlreadyCheckedIn,
            ErrorCode::InvalidLeaveRange,
            ErrorCode::PayrollNotFound,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code_is_rejected() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::AlreadyCheckedIn).unwrap();
        assert_eq!(json, "3002");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::AlreadyCheckedIn);
    }
}
