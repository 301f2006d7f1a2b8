//! Dayflow HRMS core
//!
//! The attendance/leave/payroll computation and reconciliation core:
//! the rules that turn raw check-in/check-out timestamps and leave approvals
//! into authoritative daily status, monthly aggregates, and salary figures.
//!
//! # Module structure
//!
//! ```text
//! dayflow-core/src/
//! ├── config.rs      # Env-var configuration, business timezone
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── services/      # Onboarding, attendance, leave, payroll, reconciler
//! ├── reports/       # Monthly/org-wide rollups, dashboard counters
//! ├── slip.rs        # Salary-slip payload for the PDF renderer
//! ├── notify.rs      # Notification collaborator seam
//! └── utils/         # Calendar math, validation, logging
//! ```
//!
//! HTTP routing, session handling, HTML rendering, file storage, email
//! delivery, and PDF layout are external collaborators; the core only
//! exposes the contracts they consume.

pub mod config;
pub mod db;
pub mod notify;
pub mod reports;
pub mod services;
pub mod slip;
pub mod utils;

// Re-export public types
pub use config::Config;
pub use db::DbService;
pub use notify::{LogNotifier, Notifier};
pub use slip::{SalarySlip, SlipLine, SlipRenderer, build_salary_slip};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
