//! Onboarding service
//!
//! Employee creation and the explicit post-creation hook that provisions the
//! placeholder Profile and the zero-salary initial Payroll version. The hook
//! is an ordinary function so it can be exercised (and repaired) on its own.

use super::map_repo_err;
use crate::db::repository::{employee, payroll, profile};
use crate::notify::Notifier;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, validate_employee_id, validate_required_text,
};
use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate};
use sqlx::SqlitePool;

/// Create an employee and provision its dependent records.
///
/// Sends the account-activation notice through the notification seam; actual
/// delivery is the collaborator's problem.
pub async fn create_employee(
    pool: &SqlitePool,
    notifier: &dyn Notifier,
    data: EmployeeCreate,
    joining: NaiveDate,
) -> AppResult<Employee> {
    validate_employee_id(&data.employee_id)?;
    validate_required_text(&data.full_name, "full_name", MAX_NAME_LEN)?;
    validate_required_text(&data.email, "email", MAX_EMAIL_LEN)?;

    if employee::find_by_employee_id(pool, &data.employee_id)
        .await
        .map_err(map_repo_err)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmployeeIdExists));
    }
    if employee::find_by_email(pool, &data.email)
        .await
        .map_err(map_repo_err)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmailExists));
    }

    // The unique indexes remain the backstop if two creations race past the
    // pre-checks; the loser surfaces as a conflict.
    let created = employee::create(pool, data).await.map_err(map_repo_err)?;
    provision_records(pool, created.id, joining).await?;

    notifier.send(
        &created.email,
        "Activate your Dayflow HRMS Account",
        &format!(
            "Hello {},\n\nThank you for registering at Dayflow HRMS!\n\nPlease verify your email address to activate your account.",
            created.full_name
        ),
    )?;

    tracing::info!(
        employee_id = created.id,
        code = %created.employee_id,
        "Employee onboarded"
    );
    Ok(created)
}

/// Post-creation hook: exactly one Profile (placeholder job fields) and, if
/// the employee has no payroll history, one zero-salary Payroll version.
/// Safe to call repeatedly.
pub async fn provision_records(
    pool: &SqlitePool,
    employee_id: i64,
    joining: NaiveDate,
) -> AppResult<()> {
    profile::get_or_create(pool, employee_id, joining)
        .await
        .map_err(map_repo_err)?;
    payroll::ensure_initial(pool, employee_id, joining)
        .await
        .map_err(map_repo_err)?;
    Ok(())
}

/// Back-fill missing Profile/Payroll rows for existing employees.
/// Returns how many employees needed a repair.
pub async fn fix_missing_records(pool: &SqlitePool, today: NaiveDate) -> AppResult<usize> {
    let mut fixed = 0;
    for emp in employee::find_all(pool).await.map_err(map_repo_err)? {
        let missing_profile = profile::find_by_employee(pool, emp.id)
            .await
            .map_err(map_repo_err)?
            .is_none();
        let missing_payroll = payroll::current_for(pool, emp.id)
            .await
            .map_err(map_repo_err)?
            .is_none();
        if missing_profile || missing_payroll {
            provision_records(pool, emp.id, today).await?;
            tracing::info!(employee_id = emp.id, code = %emp.employee_id, "Repaired missing records");
            fixed += 1;
        }
    }
    Ok(fixed)
}

/// Mark the employee's email as verified. Returns false when it was already
/// verified (nothing to do).
pub async fn mark_verified(pool: &SqlitePool, employee_id: i64) -> AppResult<bool> {
    employee::find_by_id(pool, employee_id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    let changed = employee::mark_verified(pool, employee_id)
        .await
        .map_err(map_repo_err)?;
    if changed {
        tracing::info!(employee_id, "Email verified");
    }
    Ok(changed)
}
