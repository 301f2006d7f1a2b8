//! Profile Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{NOT_ASSIGNED, Profile, ProfileUpdate};
use sqlx::SqlitePool;

const PROFILE_SELECT: &str = "SELECT id, employee_id, designation, department, date_of_joining, employment_type, phone_number, address, emergency_contact, created_at, updated_at FROM profile";

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Option<Profile>> {
    let sql = format!("{} WHERE employee_id = ?", PROFILE_SELECT);
    let row = sqlx::query_as::<_, Profile>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Atomic get-or-create of the 1:1 profile row.
///
/// `ON CONFLICT DO NOTHING` makes concurrent onboarding of the same employee
/// converge on a single row; the follow-up select returns it either way.
pub async fn get_or_create(
    pool: &SqlitePool,
    employee_id: i64,
    date_of_joining: NaiveDate,
) -> RepoResult<Profile> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO profile (id, employee_id, designation, department, date_of_joining, employment_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?3, ?4, 'FULL_TIME', ?5, ?5) ON CONFLICT(employee_id) DO NOTHING",
    )
    .bind(id)
    .bind(employee_id)
    .bind(NOT_ASSIGNED)
    .bind(date_of_joining)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_employee(pool, employee_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create profile".into()))
}

pub async fn update(
    pool: &SqlitePool,
    employee_id: i64,
    data: ProfileUpdate,
) -> RepoResult<Profile> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE profile SET designation = COALESCE(?1, designation), department = COALESCE(?2, department), date_of_joining = COALESCE(?3, date_of_joining), employment_type = COALESCE(?4, employment_type), phone_number = COALESCE(?5, phone_number), address = COALESCE(?6, address), emergency_contact = COALESCE(?7, emergency_contact), updated_at = ?8 WHERE employee_id = ?9",
    )
    .bind(&data.designation)
    .bind(&data.department)
    .bind(data.date_of_joining)
    .bind(data.employment_type)
    .bind(&data.phone_number)
    .bind(&data.address)
    .bind(&data.emergency_contact)
    .bind(now)
    .bind(employee_id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Profile for employee {employee_id} not found"
        )));
    }
    find_by_employee(pool, employee_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Profile for employee {employee_id} not found")))
}
