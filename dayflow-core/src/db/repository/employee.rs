//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, Role};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, employee_id, full_name, email, role, email_verified, is_active, created_at, updated_at FROM employee";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{} WHERE id = ?", EMPLOYEE_SELECT);
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_employee_id(pool: &SqlitePool, employee_id: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{} WHERE employee_id = ?", EMPLOYEE_SELECT);
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{} WHERE email = ?", EMPLOYEE_SELECT);
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{} ORDER BY employee_id", EMPLOYEE_SELECT);
    let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn count_by_role(pool: &SqlitePool, role: Role) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE role = ?")
        .bind(role)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, employee_id, full_name, email, role, email_verified, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, 1, ?6, ?6)",
    )
    .bind(id)
    .bind(&data.employee_id)
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(data.role)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET full_name = COALESCE(?1, full_name), email = COALESCE(?2, email), role = COALESCE(?3, role), is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(data.role)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Mark the employee's email as verified. Returns false if already verified
/// or the employee does not exist.
pub async fn mark_verified(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET email_verified = 1, updated_at = ?1 WHERE id = ?2 AND email_verified = 0",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Delete an employee. Profile, attendance, leave, and payroll rows go with
/// it via ON DELETE CASCADE.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;

    fn sample(employee_id: &str, email: &str) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: employee_id.into(),
            full_name: "Asha Rao".into(),
            email: email.into(),
            role: Role::Employee,
        }
    }

    #[tokio::test]
    async fn create_and_find() {
        let pool = test_pool().await;
        let created = create(&pool, sample("EMP1001", "asha@dayflow.test"))
            .await
            .unwrap();
        assert!(created.is_active);
        assert!(!created.email_verified);

        let by_code = find_by_employee_id(&pool, "EMP1001").await.unwrap().unwrap();
        assert_eq!(by_code.id, created.id);
        assert_eq!(by_code.role, Role::Employee);
    }

    #[tokio::test]
    async fn duplicate_employee_id_is_a_conflict() {
        let pool = test_pool().await;
        create(&pool, sample("EMP1001", "a@dayflow.test")).await.unwrap();
        let err = create(&pool, sample("EMP1001", "b@dayflow.test"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn mark_verified_is_one_shot() {
        let pool = test_pool().await;
        let e = create(&pool, sample("EMP1002", "v@dayflow.test")).await.unwrap();
        assert!(mark_verified(&pool, e.id).await.unwrap());
        assert!(!mark_verified(&pool, e.id).await.unwrap());
        let e = find_by_id(&pool, e.id).await.unwrap().unwrap();
        assert!(e.email_verified);
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_rows() {
        let pool = test_pool().await;
        let e = create(&pool, sample("EMP1003", "c@dayflow.test")).await.unwrap();
        crate::db::repository::profile::get_or_create(&pool, e.id, "2024-01-01".parse().unwrap())
            .await
            .unwrap();
        assert!(delete(&pool, e.id).await.unwrap());
        let orphan = crate::db::repository::profile::find_by_employee(&pool, e.id)
            .await
            .unwrap();
        assert!(orphan.is_none());
    }
}
