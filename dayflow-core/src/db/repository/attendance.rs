//! Attendance Repository
//!
//! One row per (employee, calendar day), enforced by a unique index.
//! Mutations are guarded single-set updates: the `WHERE` clause carries the
//! state precondition, so a lost race shows up as `rows_affected() == 0`
//! rather than a second write.

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{Attendance, AttendanceStatus};
use sqlx::SqlitePool;

const ATTENDANCE_SELECT: &str = "SELECT id, employee_id, date, check_in_time, check_out_time, status, total_hours, notes, created_at, updated_at FROM attendance";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Attendance>> {
    let sql = format!("{} WHERE id = ?", ATTENDANCE_SELECT);
    let row = sqlx::query_as::<_, Attendance>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_employee_and_date(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> RepoResult<Option<Attendance>> {
    let sql = format!("{} WHERE employee_id = ? AND date = ?", ATTENDANCE_SELECT);
    let row = sqlx::query_as::<_, Attendance>(&sql)
        .bind(employee_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Atomic get-or-create of the day's row.
///
/// A freshly created row has no timestamps, status ABSENT, and no notes.
/// Two concurrent callers both end up reading the single surviving row.
pub async fn get_or_create(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> RepoResult<Attendance> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO attendance (id, employee_id, date, status, total_hours, created_at, updated_at) VALUES (?1, ?2, ?3, 'ABSENT', 0, ?4, ?4) ON CONFLICT(employee_id, date) DO NOTHING",
    )
    .bind(id)
    .bind(employee_id)
    .bind(date)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_employee_and_date(pool, employee_id, date)
        .await?
        .ok_or_else(|| super::RepoError::Database("Failed to create attendance row".into()))
}

/// Record the check-in timestamp once; the day starts as PRESENT until
/// check-out derives the real status. Returns false when a check-in
/// timestamp already exists.
pub async fn set_check_in(pool: &SqlitePool, id: i64, timestamp: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE attendance SET check_in_time = ?1, status = 'PRESENT', updated_at = ?2 WHERE id = ?3 AND check_in_time IS NULL",
    )
    .bind(timestamp)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Record the check-out timestamp and the derived hours/status once.
/// Returns false when there is no check-in yet or a check-out already exists.
pub async fn set_check_out(
    pool: &SqlitePool,
    id: i64,
    timestamp: i64,
    total_hours: f64,
    status: AttendanceStatus,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE attendance SET check_out_time = ?1, total_hours = ?2, status = ?3, updated_at = ?4 WHERE id = ?5 AND check_in_time IS NOT NULL AND check_out_time IS NULL",
    )
    .bind(timestamp)
    .bind(total_hours)
    .bind(status)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Reconciler patch: force ABSENT + leave notes, but only on rows with no
/// real check-in. A checked-in employee's record always stands.
pub async fn mark_leave_day(pool: &SqlitePool, id: i64, notes: &str) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE attendance SET status = 'ABSENT', notes = ?1, updated_at = ?2 WHERE id = ?3 AND check_in_time IS NULL",
    )
    .bind(notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn find_range_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<Attendance>> {
    let sql = format!(
        "{} WHERE employee_id = ? AND date >= ? AND date <= ? ORDER BY date",
        ATTENDANCE_SELECT
    );
    let rows = sqlx::query_as::<_, Attendance>(&sql)
        .bind(employee_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count_by_status_on(
    pool: &SqlitePool,
    date: NaiveDate,
    status: AttendanceStatus,
) -> RepoResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
            .bind(date)
            .bind(status)
            .fetch_one(pool)
            .await?;
    Ok(count)
}
