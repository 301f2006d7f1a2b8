//! Leave request service

use super::map_repo_err;
use crate::db::repository::{RepoError, employee, leave_request};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Employee, LeaveDecision, LeaveRequest, LeaveRequestCreate, LeaveStatus, is_admin,
};
use sqlx::SqlitePool;

/// Submit a new leave request; it enters the queue as PENDING.
pub async fn submit(
    pool: &SqlitePool,
    employee_id: i64,
    data: LeaveRequestCreate,
) -> AppResult<LeaveRequest> {
    if data.start_date > data.end_date {
        return Err(AppError::with_message(
            ErrorCode::InvalidLeaveRange,
            format!(
                "Start date {} is after end date {}",
                data.start_date, data.end_date
            ),
        ));
    }
    validate_optional_text(&data.remarks, "remarks", MAX_NOTE_LEN)?;

    employee::find_by_id(pool, employee_id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    let leave = leave_request::create(pool, employee_id, data)
        .await
        .map_err(|err| match err {
            // Range recheck in the repository; keep the precise code.
            RepoError::Validation(msg) => {
                AppError::with_message(ErrorCode::InvalidLeaveRange, msg)
            }
            other => map_repo_err(other),
        })?;
    tracing::info!(leave_id = leave.id, employee_id, "Leave request submitted");
    Ok(leave)
}

/// Approve or reject a leave request.
///
/// Only admins decide. Deciding an already-decided request is allowed and
/// overwrites the previous decision; approval never touches attendance here,
/// reconciliation happens in the daily sweep.
pub async fn decide(
    pool: &SqlitePool,
    leave_id: i64,
    decision: LeaveDecision,
    admin: &Employee,
) -> AppResult<LeaveRequest> {
    if !is_admin(admin.role) {
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    validate_optional_text(&decision.comment, "comment", MAX_NOTE_LEN)?;

    let status = decision.action.target_status();
    let leave = leave_request::decide(pool, leave_id, status, admin.id, decision.comment.as_deref())
        .await
        .map_err(|err| match err {
            RepoError::NotFound(_) => AppError::new(ErrorCode::LeaveNotFound),
            other => map_repo_err(other),
        })?;
    tracing::info!(
        leave_id,
        admin_id = admin.id,
        status = ?leave.status,
        "Leave request decided"
    );
    Ok(leave)
}

/// All leave requests of one employee, newest first.
pub async fn list_for_employee(pool: &SqlitePool, employee_id: i64) -> AppResult<Vec<LeaveRequest>> {
    leave_request::find_for_employee(pool, employee_id)
        .await
        .map_err(map_repo_err)
}

/// The admin approval queue.
pub async fn list_pending(pool: &SqlitePool) -> AppResult<Vec<LeaveRequest>> {
    leave_request::find_by_status(pool, LeaveStatus::Pending)
        .await
        .map_err(map_repo_err)
}
