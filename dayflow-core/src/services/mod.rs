//! Service Module
//!
//! Business operations over the repositories. Services own the translation
//! from generic repository errors into precise domain error codes; callers
//! only ever see [`AppError`].

pub mod attendance;
pub mod leave;
pub mod onboarding;
pub mod payroll;
pub mod reconciler;

use crate::db::repository::RepoError;
use shared::error::AppError;

/// Default translation of repository errors.
///
/// Operations that can fail in a more specific way (duplicate check-in,
/// missing leave request) match on the repo error themselves before falling
/// back to this.
pub(crate) fn map_repo_err(err: RepoError) -> AppError {
    use shared::error::ErrorCode;
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
        RepoError::Duplicate(msg) => AppError::conflict(msg),
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}
