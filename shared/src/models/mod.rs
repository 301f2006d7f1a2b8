//! Data models
//!
//! Shared between the persistence layer and external callers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (snowflake-style, SQLite INTEGER PRIMARY KEY);
//! timestamps are Unix millis, calendar days are `chrono::NaiveDate`.

pub mod attendance;
pub mod employee;
pub mod leave_request;
pub mod payroll;
pub mod profile;

// Re-exports
pub use attendance::*;
pub use employee::*;
pub use leave_request::*;
pub use payroll::*;
pub use profile::*;
