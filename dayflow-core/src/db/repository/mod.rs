//! Repository Module
//!
//! CRUD operations over the SQLite schema. Repositories are free async
//! functions taking `&SqlitePool`; business-rule translation of the errors
//! they return lives in the service layer.

pub mod attendance;
pub mod employee;
pub mod leave_request;
pub mod payroll;
pub mod profile;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        // Unique-index violations are the storage-level backstop for
        // duplicate check-ins and duplicate payroll versions; surface them
        // as conflicts, not as opaque database failures.
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
