//! Leave-to-attendance reconciler
//!
//! Daily sweep that back-fills attendance rows for employees on approved
//! leave. The external scheduler's contract is at-least-once: the sweep is
//! idempotent, so re-running it for the same day converges on the same
//! ledger state.

use super::map_repo_err;
use crate::db::repository::{attendance, leave_request};
use chrono::NaiveDate;
use shared::error::AppResult;
use shared::models::LeaveType;
use sqlx::SqlitePool;

/// Notes text written on a leave-covered day with no real activity.
fn leave_notes(leave_type: LeaveType) -> String {
    format!("On {} leave", leave_type.label())
}

/// Run the sweep for one calendar day.
///
/// For every approved leave covering `date`, the employee's attendance row
/// is created if missing and, when it holds no check-in timestamp, patched
/// to ABSENT with explanatory notes. A day with a real check-in is left
/// untouched: check-in always wins over leave bookkeeping.
///
/// Returns the number of approved leave rows considered (not the number of
/// attendance rows mutated).
pub async fn run_daily_sweep(pool: &SqlitePool, date: NaiveDate) -> AppResult<usize> {
    let leaves = leave_request::find_approved_covering(pool, date)
        .await
        .map_err(map_repo_err)?;
    if leaves.is_empty() {
        tracing::debug!(%date, "No approved leave covers this day");
        return Ok(0);
    }

    let mut patched = 0;
    for leave in &leaves {
        let row = attendance::get_or_create(pool, leave.employee_id, date)
            .await
            .map_err(map_repo_err)?;
        let notes = leave_notes(leave.leave_type);
        if attendance::mark_leave_day(pool, row.id, &notes)
            .await
            .map_err(map_repo_err)?
        {
            patched += 1;
        } else {
            tracing::debug!(
                employee_id = leave.employee_id,
                %date,
                "Employee checked in, leaving attendance record untouched"
            );
        }
    }

    tracing::info!(
        %date,
        considered = leaves.len(),
        patched,
        "Leave reconciliation sweep finished"
    );
    Ok(leaves.len())
}
