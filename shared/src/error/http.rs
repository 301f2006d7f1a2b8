//! HTTP status code mapping for error codes
//!
//! The core has no HTTP surface of its own; callers use this mapping to
//! surface errors as their 404/409-equivalents.

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::EmployeeNotFound
            | Self::ProfileNotFound
            | Self::AttendanceNotFound
            | Self::LeaveNotFound
            | Self::PayrollNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::EmployeeIdExists
            | Self::EmailExists
            | Self::AlreadyCheckedIn
            | Self::AlreadyCheckedOut => StatusCode::CONFLICT,

            // 403 Forbidden
            Self::PermissionDenied | Self::RoleRequired | Self::AdminRequired => {
                StatusCode::FORBIDDEN
            }

            // 422 Unprocessable (state errors: the request is well-formed but
            // the ledger is not in a state that allows it)
            Self::NotCheckedInYet | Self::EmailNotVerified => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            ErrorCode::EmployeeNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::LeaveNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflicts_map_to_409() {
        assert_eq!(
            ErrorCode::AlreadyCheckedIn.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::AlreadyCheckedOut.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_state_error_maps_to_422() {
        assert_eq!(
            ErrorCode::NotCheckedInYet.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            ErrorCode::InvalidLeaveRange.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidEmployeeId.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
