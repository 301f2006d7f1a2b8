//! Calendar arithmetic in the business timezone
//!
//! All date parsing and window math happens here; repositories only ever see
//! `NaiveDate` and `i64` Unix millis.

use chrono::{Datelike, Duration, NaiveDate};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's calendar date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Current (month, year) in the business timezone, for default slip periods
pub fn current_month_year(tz: Tz) -> (u32, i32) {
    let now = chrono::Utc::now().with_timezone(&tz);
    (now.month(), now.year())
}

/// [Monday, Sunday] of the ISO week containing `date`
pub fn week_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// [first, last] calendar day of the month, using the actual month length
pub fn month_window(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid month: {year}-{month:02}")))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::validation(format!("Invalid month: {year}-{month:02}")))?;
    Ok((first, next_first - Duration::days(1)))
}
