//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so the limits live here.

use regex::Regex;
use shared::error::{AppError, AppResult, ErrorCode};
use std::sync::LazyLock;

// ── Text length limits ──────────────────────────────────────────────

/// Names: employee full name, designation, department
pub const MAX_NAME_LEN: usize = 200;

/// Notes, remarks, admin comments, addresses
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers, emergency contacts
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Employee ID format: EMP followed by 4-6 digits
static EMPLOYEE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^EMP\d{4,6}$").expect("employee id regex"));

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate the employee ID format (EMP followed by 4-6 digits).
pub fn validate_employee_id(employee_id: &str) -> AppResult<()> {
    if !EMPLOYEE_ID_RE.is_match(employee_id) {
        return Err(AppError::with_message(
            ErrorCode::InvalidEmployeeId,
            format!("Invalid employee ID: {employee_id}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_format() {
        assert!(validate_employee_id("EMP1234").is_ok());
        assert!(validate_employee_id("EMP123456").is_ok());

        for bad in ["EMP123", "EMP1234567", "emp1234", "1234", "EMPX234", "EMP 1234"] {
            let err = validate_employee_id(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidEmployeeId, "{bad}");
        }
    }

    #[test]
    fn required_text_limits() {
        assert!(validate_required_text("Asha", "full_name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("  ", "full_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "full_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_limits() {
        assert!(validate_optional_text(&None, "remarks", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "remarks", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "remarks", MAX_NOTE_LEN).is_err());
    }
}
