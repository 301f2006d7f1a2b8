//! Leave Request Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{LeaveRequest, LeaveRequestCreate, LeaveStatus};
use sqlx::SqlitePool;

const LEAVE_SELECT: &str = "SELECT id, employee_id, leave_type, start_date, end_date, remarks, status, admin_comment, approved_by, created_at, updated_at FROM leave_request";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequest>> {
    let sql = format!("{} WHERE id = ?", LEAVE_SELECT);
    let row = sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    employee_id: i64,
    data: LeaveRequestCreate,
) -> RepoResult<LeaveRequest> {
    if data.start_date > data.end_date {
        return Err(RepoError::Validation(format!(
            "Leave start date {} is after end date {}",
            data.start_date, data.end_date
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO leave_request (id, employee_id, leave_type, start_date, end_date, remarks, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'PENDING', ?7, ?7)",
    )
    .bind(id)
    .bind(employee_id)
    .bind(data.leave_type)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.remarks)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create leave request".into()))
}

/// Transition a leave request to APPROVED or REJECTED, recording the
/// deciding admin and comment.
///
/// Deliberately does not guard on the current status: re-deciding an
/// already-decided request overwrites the decision (admin correction).
pub async fn decide(
    pool: &SqlitePool,
    id: i64,
    status: LeaveStatus,
    admin_id: i64,
    comment: Option<&str>,
) -> RepoResult<LeaveRequest> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE leave_request SET status = ?1, approved_by = ?2, admin_comment = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(status)
    .bind(admin_id)
    .bind(comment)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Leave request {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Leave request {id} not found")))
}

pub async fn find_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<LeaveRequest>> {
    let sql = format!(
        "{} WHERE employee_id = ? ORDER BY created_at DESC",
        LEAVE_SELECT
    );
    let rows = sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_status(pool: &SqlitePool, status: LeaveStatus) -> RepoResult<Vec<LeaveRequest>> {
    let sql = format!(
        "{} WHERE status = ? ORDER BY created_at DESC",
        LEAVE_SELECT
    );
    let rows = sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Approved leaves whose inclusive range covers the given day.
pub async fn find_approved_covering(
    pool: &SqlitePool,
    date: NaiveDate,
) -> RepoResult<Vec<LeaveRequest>> {
    let sql = format!(
        "{} WHERE status = 'APPROVED' AND start_date <= ?1 AND end_date >= ?1 ORDER BY start_date",
        LEAVE_SELECT
    );
    let rows = sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(date)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Approved leaves for one employee overlapping the inclusive [start, end]
/// range (overlap test: start_date <= end AND end_date >= start).
pub async fn find_approved_overlapping(
    pool: &SqlitePool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<LeaveRequest>> {
    let sql = format!(
        "{} WHERE employee_id = ?1 AND status = 'APPROVED' AND start_date <= ?3 AND end_date >= ?2 ORDER BY start_date",
        LEAVE_SELECT
    );
    let rows = sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(employee_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count_pending(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM leave_request WHERE status = 'PENDING'")
            .fetch_one(pool)
            .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::employee;
    use crate::db::test_support::test_pool;
    use shared::models::{EmployeeCreate, LeaveType, Role};

    async fn seed(pool: &SqlitePool, code: &str, email: &str) -> i64 {
        employee::create(
            pool,
            EmployeeCreate {
                employee_id: code.into(),
                full_name: "Nina Das".into(),
                email: email.into(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn request(leave_type: LeaveType, start: &str, end: &str) -> LeaveRequestCreate {
        LeaveRequestCreate {
            leave_type,
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            remarks: Some("family visit".into()),
        }
    }

    #[tokio::test]
    async fn create_starts_pending() {
        let pool = test_pool().await;
        let eid = seed(&pool, "EMP4001", "n1@dayflow.test").await;
        let leave = create(&pool, eid, request(LeaveType::Casual, "2024-05-01", "2024-05-03"))
            .await
            .unwrap();
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert!(leave.approved_by.is_none());
        assert_eq!(leave.total_days(), 3);
    }

    #[tokio::test]
    async fn inverted_range_is_rejected_for_any_pair() {
        let pool = test_pool().await;
        let eid = seed(&pool, "EMP4002", "n2@dayflow.test").await;
        for (start, end) in [
            ("2024-05-02", "2024-05-01"),
            ("2024-12-31", "2024-01-01"),
            ("2025-01-01", "2024-12-31"),
        ] {
            let err = create(&pool, eid, request(LeaveType::Paid, start, end))
                .await
                .unwrap_err();
            assert!(matches!(err, RepoError::Validation(_)), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn decide_missing_request_is_not_found() {
        let pool = test_pool().await;
        let err = decide(&pool, 42, LeaveStatus::Approved, 1, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn decide_twice_overwrites() {
        let pool = test_pool().await;
        let eid = seed(&pool, "EMP4003", "n3@dayflow.test").await;
        let admin = seed(&pool, "EMP4004", "hr@dayflow.test").await;
        let leave = create(&pool, eid, request(LeaveType::Sick, "2024-05-01", "2024-05-01"))
            .await
            .unwrap();

        let approved = decide(&pool, leave.id, LeaveStatus::Approved, admin, Some("ok"))
            .await
            .unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_by, Some(admin));
        assert_eq!(approved.admin_comment.as_deref(), Some("ok"));

        // Re-deciding is allowed; the decision is overwritten in place.
        let rejected = decide(
            &pool,
            leave.id,
            LeaveStatus::Rejected,
            admin,
            Some("quota exceeded"),
        )
        .await
        .unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.admin_comment.as_deref(), Some("quota exceeded"));
    }

    #[tokio::test]
    async fn approved_covering_filters_by_day_and_status() {
        let pool = test_pool().await;
        let eid = seed(&pool, "EMP4005", "n5@dayflow.test").await;
        let admin = seed(&pool, "EMP4006", "hr2@dayflow.test").await;

        let covering = create(&pool, eid, request(LeaveType::Paid, "2024-05-01", "2024-05-05"))
            .await
            .unwrap();
        let outside = create(&pool, eid, request(LeaveType::Paid, "2024-05-10", "2024-05-12"))
            .await
            .unwrap();
        let pending = create(&pool, eid, request(LeaveType::Paid, "2024-05-02", "2024-05-04"))
            .await
            .unwrap();
        decide(&pool, covering.id, LeaveStatus::Approved, admin, None)
            .await
            .unwrap();
        decide(&pool, outside.id, LeaveStatus::Approved, admin, None)
            .await
            .unwrap();
        let _ = pending; // stays PENDING

        let hits = find_approved_covering(&pool, "2024-05-03".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, covering.id);
    }
}
