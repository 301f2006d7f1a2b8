//! Payroll service

use super::map_repo_err;
use crate::db::repository::{RepoError, employee, payroll};
use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Payroll, PayrollComponents, UpsertOutcome};
use sqlx::SqlitePool;

/// Write a compensation version for (employee, effective_date).
///
/// An existing version for the pair is replaced in place; a new effective
/// date starts a new version. The outcome says which happened so the caller
/// can phrase its confirmation.
pub async fn upsert_version(
    pool: &SqlitePool,
    employee_id: i64,
    effective_date: NaiveDate,
    components: &PayrollComponents,
) -> AppResult<(Payroll, UpsertOutcome)> {
    employee::find_by_id(pool, employee_id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    let (row, outcome) = payroll::upsert_version(pool, employee_id, effective_date, components)
        .await
        .map_err(|err| match err {
            RepoError::Validation(msg) => {
                AppError::with_message(ErrorCode::NegativeSalaryComponent, msg)
            }
            other => map_repo_err(other),
        })?;
    tracing::info!(
        employee_id,
        %effective_date,
        outcome = ?outcome,
        "Payroll version written"
    );
    Ok((row, outcome))
}

/// The employee's currently effective payroll, if any exists yet.
pub async fn current_for(pool: &SqlitePool, employee_id: i64) -> AppResult<Option<Payroll>> {
    payroll::current_for(pool, employee_id)
        .await
        .map_err(map_repo_err)
}

/// Full version history, newest effective date first.
pub async fn history(pool: &SqlitePool, employee_id: i64) -> AppResult<Vec<Payroll>> {
    payroll::find_for_employee(pool, employee_id)
        .await
        .map_err(map_repo_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::employee;
    use crate::db::test_support::test_pool;
    use rust_decimal::Decimal;
    use shared::models::{EmployeeCreate, Role};

    async fn seed(pool: &SqlitePool) -> i64 {
        employee::create(
            pool,
            EmployeeCreate {
                employee_id: "EMP8001".into(),
                full_name: "Tara Menon".into(),
                email: "tara@dayflow.test".into(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn upsert_for_unknown_employee_is_rejected() {
        let pool = test_pool().await;
        let err = upsert_version(
            &pool,
            12345,
            "2024-04-01".parse().unwrap(),
            &PayrollComponents::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }

    #[tokio::test]
    async fn negative_component_surfaces_precise_code() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;
        let components = PayrollComponents {
            basic_salary: Decimal::new(-100, 2),
            ..Default::default()
        };
        let err = upsert_version(&pool, eid, "2024-04-01".parse().unwrap(), &components)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NegativeSalaryComponent);
    }

    #[tokio::test]
    async fn outcome_distinguishes_create_from_update() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;
        let date: NaiveDate = "2024-04-01".parse().unwrap();
        let components = PayrollComponents {
            basic_salary: Decimal::new(20000_00, 2),
            ..Default::default()
        };

        let (_, outcome) = upsert_version(&pool, eid, date, &components).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);
        let (_, outcome) = upsert_version(&pool, eid, date, &components).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);

        assert_eq!(history(&pool, eid).await.unwrap().len(), 1);
        let current = current_for(&pool, eid).await.unwrap().unwrap();
        assert_eq!(current.gross_salary(), Decimal::new(20000_00, 2));
    }
}
