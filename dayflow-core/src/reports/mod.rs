//! Aggregation Reporting
//!
//! Read-only rollups over the attendance and leave ledgers. Reports run at
//! default isolation; a report missing a same-second write is acceptable.

use crate::db::repository::leave_request;
use crate::services::map_repo_err;
use crate::utils::time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{LeaveRequest, Role};
use sqlx::SqlitePool;

/// Per-employee monthly rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAttendanceSummary {
    pub employee_id: i64,
    pub year: i32,
    pub month: u32,
    pub present_days: i64,
    pub half_days: i64,
    pub absent_days: i64,
    pub total_hours: f64,
    /// Approved leaves overlapping the month
    pub approved_leaves: Vec<LeaveRequest>,
}

/// One employee's bucket in the org-wide summary
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrgSummaryRow {
    pub employee_id: i64,
    pub employee_code: String,
    pub full_name: String,
    pub present_days: i64,
    pub half_days: i64,
    pub absent_days: i64,
    pub total_hours: f64,
}

/// Admin dashboard counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: i64,
    pub present_today: i64,
    pub pending_leaves: i64,
}

#[derive(sqlx::FromRow)]
struct StatusCounts {
    present_days: i64,
    half_days: i64,
    absent_days: i64,
    total_hours: f64,
}

const STATUS_BUCKETS: &str = "COALESCE(SUM(CASE WHEN status = 'PRESENT' THEN 1 ELSE 0 END), 0) AS present_days, COALESCE(SUM(CASE WHEN status = 'HALF_DAY' THEN 1 ELSE 0 END), 0) AS half_days, COALESCE(SUM(CASE WHEN status = 'ABSENT' THEN 1 ELSE 0 END), 0) AS absent_days, COALESCE(SUM(total_hours), 0.0) AS total_hours";

/// Monthly rollup for one employee: status day-counts, summed hours, and the
/// approved leaves overlapping the month.
pub async fn monthly_attendance_summary(
    pool: &SqlitePool,
    employee_id: i64,
    year: i32,
    month: u32,
) -> AppResult<MonthlyAttendanceSummary> {
    let (month_start, month_end) = time::month_window(year, month)?;

    let sql = format!(
        "SELECT {STATUS_BUCKETS} FROM attendance WHERE employee_id = ? AND date >= ? AND date <= ?"
    );
    let counts = sqlx::query_as::<_, StatusCounts>(&sql)
        .bind(employee_id)
        .bind(month_start)
        .bind(month_end)
        .fetch_one(pool)
        .await
        .map_err(|e| map_repo_err(e.into()))?;

    let approved_leaves =
        leave_request::find_approved_overlapping(pool, employee_id, month_start, month_end)
            .await
            .map_err(map_repo_err)?;

    Ok(MonthlyAttendanceSummary {
        employee_id,
        year,
        month,
        present_days: counts.present_days,
        half_days: counts.half_days,
        absent_days: counts.absent_days,
        total_hours: counts.total_hours,
        approved_leaves,
    })
}

/// Org-wide summary for an inclusive date range, one row per employee with
/// any attendance in the range.
pub async fn org_summary(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<OrgSummaryRow>> {
    let sql = format!(
        "SELECT e.id AS employee_id, e.employee_id AS employee_code, e.full_name, {STATUS_BUCKETS} \
         FROM attendance a JOIN employee e ON a.employee_id = e.id \
         WHERE a.date >= ? AND a.date <= ? \
         GROUP BY e.id, e.employee_id, e.full_name \
         ORDER BY e.employee_id"
    );
    let rows = sqlx::query_as::<_, OrgSummaryRow>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
        .map_err(|e| map_repo_err(e.into()))?;
    Ok(rows)
}

/// Admin dashboard counters for one day.
pub async fn dashboard(pool: &SqlitePool, today: NaiveDate) -> AppResult<DashboardStats> {
    use crate::db::repository::{attendance, employee};
    use shared::models::AttendanceStatus;

    Ok(DashboardStats {
        total_employees: employee::count_by_role(pool, Role::Employee)
            .await
            .map_err(map_repo_err)?,
        present_today: attendance::count_by_status_on(pool, today, AttendanceStatus::Present)
            .await
            .map_err(map_repo_err)?,
        pending_leaves: leave_request::count_pending(pool).await.map_err(map_repo_err)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{employee, leave_request};
    use crate::db::test_support::test_pool;
    use crate::services::attendance as attendance_service;
    use shared::models::{EmployeeCreate, LeaveRequestCreate, LeaveStatus, LeaveType, Role};

    const HOUR_MS: i64 = 3600 * 1000;

    async fn seed(pool: &SqlitePool, code: &str, email: &str, role: Role) -> i64 {
        employee::create(
            pool,
            EmployeeCreate {
                employee_id: code.into(),
                full_name: format!("Employee {code}"),
                email: email.into(),
                role,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    async fn work_day(pool: &SqlitePool, emp: i64, date: &str, hours: i64) {
        attendance_service::check_in(pool, emp, d(date), 9 * HOUR_MS)
            .await
            .unwrap();
        attendance_service::check_out(pool, emp, d(date), (9 + hours) * HOUR_MS)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn monthly_summary_counts_buckets_and_hours() {
        let pool = test_pool().await;
        let emp = seed(&pool, "EMP1201", "m1@dayflow.test", Role::Employee).await;
        let admin = seed(&pool, "EMP1202", "hr@dayflow.test", Role::Admin).await;

        work_day(&pool, emp, "2024-03-04", 9).await; // present
        work_day(&pool, emp, "2024-03-05", 8).await; // present
        work_day(&pool, emp, "2024-03-06", 5).await; // half-day
        work_day(&pool, emp, "2024-03-07", 2).await; // absent
        work_day(&pool, emp, "2024-04-01", 9).await; // next month, excluded

        // Leave overlapping March at the tail end
        let leave = leave_request::create(
            &pool,
            emp,
            LeaveRequestCreate {
                leave_type: LeaveType::Paid,
                start_date: d("2024-03-30"),
                end_date: d("2024-04-02"),
                remarks: None,
            },
        )
        .await
        .unwrap();
        leave_request::decide(&pool, leave.id, LeaveStatus::Approved, admin, None)
            .await
            .unwrap();
        // Leave entirely outside March
        let outside = leave_request::create(
            &pool,
            emp,
            LeaveRequestCreate {
                leave_type: LeaveType::Casual,
                start_date: d("2024-04-10"),
                end_date: d("2024-04-11"),
                remarks: None,
            },
        )
        .await
        .unwrap();
        leave_request::decide(&pool, outside.id, LeaveStatus::Approved, admin, None)
            .await
            .unwrap();

        let summary = monthly_attendance_summary(&pool, emp, 2024, 3).await.unwrap();
        assert_eq!(summary.present_days, 2);
        assert_eq!(summary.half_days, 1);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.total_hours, 24.0);
        assert_eq!(summary.approved_leaves.len(), 1);
        assert_eq!(summary.approved_leaves[0].id, leave.id);
    }

    #[tokio::test]
    async fn monthly_summary_is_empty_for_quiet_month() {
        let pool = test_pool().await;
        let emp = seed(&pool, "EMP1203", "m2@dayflow.test", Role::Employee).await;
        let summary = monthly_attendance_summary(&pool, emp, 2024, 2).await.unwrap();
        assert_eq!(summary.present_days, 0);
        assert_eq!(summary.total_hours, 0.0);
        assert!(summary.approved_leaves.is_empty());
    }

    #[tokio::test]
    async fn org_summary_groups_by_employee() {
        let pool = test_pool().await;
        let a = seed(&pool, "EMP1204", "m3@dayflow.test", Role::Employee).await;
        let b = seed(&pool, "EMP1205", "m4@dayflow.test", Role::Employee).await;

        work_day(&pool, a, "2024-03-04", 9).await;
        work_day(&pool, a, "2024-03-05", 5).await;
        work_day(&pool, b, "2024-03-04", 2).await;

        let rows = org_summary(&pool, d("2024-03-04"), d("2024-03-05")).await.unwrap();
        assert_eq!(rows.len(), 2);

        let row_a = rows.iter().find(|r| r.employee_id == a).unwrap();
        assert_eq!(row_a.employee_code, "EMP1204");
        assert_eq!(row_a.present_days, 1);
        assert_eq!(row_a.half_days, 1);
        assert_eq!(row_a.total_hours, 14.0);

        let row_b = rows.iter().find(|r| r.employee_id == b).unwrap();
        assert_eq!(row_b.absent_days, 1);
        assert_eq!(row_b.total_hours, 2.0);
    }

    #[tokio::test]
    async fn dashboard_counts_roles_statuses_and_queue() {
        let pool = test_pool().await;
        let emp = seed(&pool, "EMP1206", "m5@dayflow.test", Role::Employee).await;
        let emp2 = seed(&pool, "EMP1207", "m6@dayflow.test", Role::Employee).await;
        let _admin = seed(&pool, "EMP1208", "hr2@dayflow.test", Role::Admin).await;

        work_day(&pool, emp, "2024-03-04", 9).await;
        leave_request::create(
            &pool,
            emp2,
            LeaveRequestCreate {
                leave_type: LeaveType::Sick,
                start_date: d("2024-03-05"),
                end_date: d("2024-03-06"),
                remarks: None,
            },
        )
        .await
        .unwrap();

        let stats = dashboard(&pool, d("2024-03-04")).await.unwrap();
        // Admins are not counted in the employee headcount.
        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.present_today, 1);
        assert_eq!(stats.pending_leaves, 1);
    }
}
