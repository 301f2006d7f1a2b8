//! Payroll Repository
//!
//! Compensation versions keyed by (employee, effective_date). Stored columns
//! are the raw components only; gross/deductions/net are computed on read.

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{Payroll, PayrollComponents, UpsertOutcome};
use shared::money::to_cents;
use sqlx::SqlitePool;

const PAYROLL_SELECT: &str = "SELECT id, employee_id, effective_date, basic_salary, house_rent_allowance, transport_allowance, medical_allowance, other_allowances, provident_fund, professional_tax, income_tax, other_deductions, created_at, updated_at FROM payroll";

fn validate_components(components: &PayrollComponents) -> RepoResult<()> {
    for (label, amount) in components.labeled() {
        if amount < Decimal::ZERO {
            return Err(RepoError::Validation(format!(
                "{label} cannot be negative: {amount}"
            )));
        }
    }
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payroll>> {
    let sql = format!("{} WHERE id = ?", PAYROLL_SELECT);
    let row = sqlx::query_as::<_, Payroll>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_employee_and_date(
    pool: &SqlitePool,
    employee_id: i64,
    effective_date: NaiveDate,
) -> RepoResult<Option<Payroll>> {
    let sql = format!(
        "{} WHERE employee_id = ? AND effective_date = ?",
        PAYROLL_SELECT
    );
    let row = sqlx::query_as::<_, Payroll>(&sql)
        .bind(employee_id)
        .bind(effective_date)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a new compensation version, or replace the component fields of an
/// existing (employee, effective_date) version in place.
///
/// The write itself is a single `ON CONFLICT DO UPDATE` statement, so two
/// concurrent upserts for the same pair can never produce two rows.
pub async fn upsert_version(
    pool: &SqlitePool,
    employee_id: i64,
    effective_date: NaiveDate,
    components: &PayrollComponents,
) -> RepoResult<(Payroll, UpsertOutcome)> {
    validate_components(components)?;

    let existing = find_by_employee_and_date(pool, employee_id, effective_date).await?;
    let outcome = if existing.is_some() {
        UpsertOutcome::Updated
    } else {
        UpsertOutcome::Created
    };

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO payroll (id, employee_id, effective_date, basic_salary, house_rent_allowance, transport_allowance, medical_allowance, other_allowances, provident_fund, professional_tax, income_tax, other_deductions, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13) \
         ON CONFLICT(employee_id, effective_date) DO UPDATE SET \
         basic_salary = excluded.basic_salary, \
         house_rent_allowance = excluded.house_rent_allowance, \
         transport_allowance = excluded.transport_allowance, \
         medical_allowance = excluded.medical_allowance, \
         other_allowances = excluded.other_allowances, \
         provident_fund = excluded.provident_fund, \
         professional_tax = excluded.professional_tax, \
         income_tax = excluded.income_tax, \
         other_deductions = excluded.other_deductions, \
         updated_at = excluded.updated_at",
    )
    .bind(id)
    .bind(employee_id)
    .bind(effective_date)
    .bind(to_cents(components.basic_salary))
    .bind(to_cents(components.house_rent_allowance))
    .bind(to_cents(components.transport_allowance))
    .bind(to_cents(components.medical_allowance))
    .bind(to_cents(components.other_allowances))
    .bind(to_cents(components.provident_fund))
    .bind(to_cents(components.professional_tax))
    .bind(to_cents(components.income_tax))
    .bind(to_cents(components.other_deductions))
    .bind(now)
    .execute(pool)
    .await?;

    let row = find_by_employee_and_date(pool, employee_id, effective_date)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to upsert payroll version".into()))?;
    Ok((row, outcome))
}

/// The "current" payroll: most recent effective date, ties broken by most
/// recent creation (then id). Absent for a brand-new employee until the
/// onboarding hook or the first salary action writes a version.
pub async fn current_for(pool: &SqlitePool, employee_id: i64) -> RepoResult<Option<Payroll>> {
    let sql = format!(
        "{} WHERE employee_id = ? ORDER BY effective_date DESC, created_at DESC, id DESC LIMIT 1",
        PAYROLL_SELECT
    );
    let row = sqlx::query_as::<_, Payroll>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_for_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Payroll>> {
    let sql = format!(
        "{} WHERE employee_id = ? ORDER BY effective_date DESC",
        PAYROLL_SELECT
    );
    let rows = sqlx::query_as::<_, Payroll>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Onboarding back-stop: insert a zero-salary version dated `effective_date`
/// unless the employee already has any payroll history. Returns true when a
/// row was inserted.
pub async fn ensure_initial(
    pool: &SqlitePool,
    employee_id: i64,
    effective_date: NaiveDate,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let rows = sqlx::query(
        "INSERT INTO payroll (id, employee_id, effective_date, created_at, updated_at) \
         SELECT ?1, ?2, ?3, ?4, ?4 \
         WHERE NOT EXISTS (SELECT 1 FROM payroll WHERE employee_id = ?2)",
    )
    .bind(id)
    .bind(employee_id)
    .bind(effective_date)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::employee;
    use crate::db::test_support::test_pool;
    use shared::models::{EmployeeCreate, Role};

    async fn seed(pool: &SqlitePool) -> i64 {
        employee::create(
            pool,
            EmployeeCreate {
                employee_id: "EMP5001".into(),
                full_name: "Kiran Patel".into(),
                email: "kiran@dayflow.test".into(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn components(basic: i64) -> PayrollComponents {
        PayrollComponents {
            basic_salary: Decimal::new(basic * 100, 2),
            house_rent_allowance: Decimal::new(5000_00, 2),
            transport_allowance: Decimal::new(1000_00, 2),
            medical_allowance: Decimal::new(500_00, 2),
            provident_fund: Decimal::new(1800_00, 2),
            professional_tax: Decimal::new(1200_00, 2),
            ..Default::default()
        }
    }

    async fn rows_for_pair(pool: &SqlitePool, eid: i64, date: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM payroll WHERE employee_id = ? AND effective_date = ?")
            .bind(eid)
            .bind(date.parse::<NaiveDate>().unwrap())
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn upsert_same_date_updates_in_place() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;
        let date: NaiveDate = "2024-04-01".parse().unwrap();

        let (first, outcome) = upsert_version(&pool, eid, date, &components(20000))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);
        assert_eq!(first.gross_salary(), Decimal::new(26500_00, 2));

        let (second, outcome) = upsert_version(&pool, eid, date, &components(22000))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(second.id, first.id);
        assert_eq!(second.basic_salary, 22000_00);
        assert_eq!(rows_for_pair(&pool, eid, "2024-04-01").await, 1);
    }

    #[tokio::test]
    async fn new_effective_date_creates_a_version_and_wins_current() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;

        upsert_version(&pool, eid, "2024-04-01".parse().unwrap(), &components(20000))
            .await
            .unwrap();
        let (later, outcome) =
            upsert_version(&pool, eid, "2024-07-01".parse().unwrap(), &components(24000))
                .await
                .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);

        let versions = find_for_employee(&pool, eid).await.unwrap();
        assert_eq!(versions.len(), 2);

        let current = current_for(&pool, eid).await.unwrap().unwrap();
        assert_eq!(current.id, later.id);
        assert_eq!(current.effective_date, "2024-07-01".parse().unwrap());
    }

    #[tokio::test]
    async fn negative_component_is_rejected_without_mutation() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;
        let mut bad = components(20000);
        bad.income_tax = Decimal::new(-1, 2);

        let err = upsert_version(&pool, eid, "2024-04-01".parse().unwrap(), &bad)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert_eq!(rows_for_pair(&pool, eid, "2024-04-01").await, 0);
    }

    #[tokio::test]
    async fn ensure_initial_only_fires_for_empty_history() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;
        let date: NaiveDate = "2024-04-01".parse().unwrap();

        assert!(ensure_initial(&pool, eid, date).await.unwrap());
        assert!(!ensure_initial(&pool, eid, date).await.unwrap());

        let current = current_for(&pool, eid).await.unwrap().unwrap();
        assert_eq!(current.basic_salary, 0);
        assert_eq!(current.net_salary(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn current_for_is_absent_without_history() {
        let pool = test_pool().await;
        let eid = seed(&pool).await;
        assert!(current_for(&pool, eid).await.unwrap().is_none());
    }
}
