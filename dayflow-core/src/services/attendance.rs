//! Attendance service
//!
//! Check-in/check-out over the day's ledger row. The guarded repository
//! updates are the concurrency backstop: when two requests race, exactly one
//! mutates and the other surfaces the same conflict a sequential caller
//! would see.

use super::map_repo_err;
use crate::db::repository::{attendance, employee};
use crate::utils::time;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Attendance, derive_hours_and_status};
use sqlx::SqlitePool;

async fn require_employee(pool: &SqlitePool, employee_id: i64) -> AppResult<()> {
    employee::find_by_id(pool, employee_id)
        .await
        .map_err(map_repo_err)?
        .map(|_| ())
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
}

/// Record today's check-in.
///
/// The day's row is created on first contact; a repeated check-in is
/// rejected with `AlreadyCheckedIn` and mutates nothing.
pub async fn check_in(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    timestamp: i64,
) -> AppResult<Attendance> {
    require_employee(pool, employee_id).await?;

    let row = attendance::get_or_create(pool, employee_id, date)
        .await
        .map_err(map_repo_err)?;
    if row.check_in_time.is_some() {
        return Err(AppError::new(ErrorCode::AlreadyCheckedIn));
    }

    if !attendance::set_check_in(pool, row.id, timestamp)
        .await
        .map_err(map_repo_err)?
    {
        // Lost a race with a concurrent check-in.
        return Err(AppError::new(ErrorCode::AlreadyCheckedIn));
    }

    tracing::info!(employee_id, %date, "Checked in");
    attendance::find_by_id(pool, row.id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::AttendanceNotFound))
}

/// Record today's check-out and derive worked hours + final status.
///
/// Fails with `NotCheckedInYet` when there is no check-in for the day and
/// with `AlreadyCheckedOut` on a repeat; neither failure mutates the row.
pub async fn check_out(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    timestamp: i64,
) -> AppResult<Attendance> {
    require_employee(pool, employee_id).await?;

    let row = attendance::find_by_employee_and_date(pool, employee_id, date)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::NotCheckedInYet))?;

    let check_in_time = row
        .check_in_time
        .ok_or_else(|| AppError::new(ErrorCode::NotCheckedInYet))?;
    if row.check_out_time.is_some() {
        return Err(AppError::new(ErrorCode::AlreadyCheckedOut));
    }

    let (hours, status) = derive_hours_and_status(check_in_time, timestamp);
    if !attendance::set_check_out(pool, row.id, timestamp, hours, status)
        .await
        .map_err(map_repo_err)?
    {
        return Err(AppError::new(ErrorCode::AlreadyCheckedOut));
    }

    tracing::info!(employee_id, %date, hours, "Checked out");
    attendance::find_by_id(pool, row.id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::AttendanceNotFound))
}

/// The employee's attendance rows for the ISO week containing `date`,
/// together with the [Monday, Sunday] window itself.
pub async fn weekly(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> AppResult<((NaiveDate, NaiveDate), Vec<Attendance>)> {
    require_employee(pool, employee_id).await?;
    let (monday, sunday) = time::week_window(date);
    let rows = attendance::find_range_for_employee(pool, employee_id, monday, sunday)
        .await
        .map_err(map_repo_err)?;
    Ok(((monday, sunday), rows))
}
