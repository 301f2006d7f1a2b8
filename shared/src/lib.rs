//! Shared types for the Dayflow HRMS core
//!
//! Data models, the unified error system, money helpers, and small
//! utilities used by both the persistence layer and external callers.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
