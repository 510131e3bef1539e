//! Loan model and due-date rules

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan status. ACTIVE while the copy is out; RETURNED and LOST are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "loan_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Active,
    Returned,
    Lost,
}

/// Loan row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookLoan {
    pub id: i32,
    pub physical_book_id: i32,
    pub client_id: i32,
    pub borrowed_date: chrono::DateTime<chrono::Utc>,
    pub due_date: NaiveDate,
    pub return_date: Option<chrono::DateTime<chrono::Utc>>,
    pub days_solicited: i32,
    pub status: LoanStatus,
}

/// Loan creation parameters after request validation
#[derive(Debug, Clone)]
pub struct CreateLoan {
    pub physical_book_id: i32,
    pub client_id: i32,
    pub days_solicited: Option<i64>,
}

/// An overdue loan as reported by `/api/reports/overdue`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OverdueLoan {
    #[serde(rename = "idBookLoan")]
    pub id: i32,
    #[serde(rename = "ClientName")]
    pub client_name: String,
    #[serde(rename = "BookTitle")]
    pub book_title: String,
    #[serde(rename = "DueDate")]
    pub due_date: NaiveDate,
    #[serde(rename = "DaysOverdue")]
    pub days_overdue: i64,
}

/// Longest loan a request may ask for. Also keeps the due-date
/// arithmetic within chrono's `Duration::days` range.
pub const MAX_LOAN_DAYS: i64 = 365;

/// A requested duration above [`MAX_LOAN_DAYS`] is rejected before any
/// write; missing or non-positive values are valid (they fall back to
/// the default).
pub fn validate_duration(requested: Option<i64>) -> bool {
    requested.map_or(true, |days| days <= MAX_LOAN_DAYS)
}

/// Resolve the requested loan duration: missing or non-positive values
/// fall back to the configured default.
pub fn effective_duration(requested: Option<i64>, default_days: i64) -> i64 {
    match requested {
        Some(days) if days > 0 => days,
        _ => default_days,
    }
}

/// Due date is always computed server-side from the borrow date.
pub fn due_date(borrowed: NaiveDate, days: i64) -> NaiveDate {
    borrowed + Duration::days(days)
}

/// Whole days a loan is overdue at `as_of`; zero or negative means not
/// overdue.
pub fn days_overdue(due: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - due).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_defaults_to_fourteen() {
        assert_eq!(effective_duration(None, 14), 14);
        assert_eq!(effective_duration(Some(0), 14), 14);
        assert_eq!(effective_duration(Some(-3), 14), 14);
        assert_eq!(effective_duration(Some(7), 14), 7);
    }

    #[test]
    fn duration_upper_bound() {
        assert!(validate_duration(None));
        assert!(validate_duration(Some(-3)));
        assert!(validate_duration(Some(MAX_LOAN_DAYS)));
        assert!(!validate_duration(Some(MAX_LOAN_DAYS + 1)));
        // chrono's Duration::days panics near i64::MAX; the bound keeps
        // huge requests out of the date arithmetic entirely
        assert!(!validate_duration(Some(i64::MAX)));
    }

    #[test]
    fn due_date_stays_in_range_at_the_cap() {
        assert_eq!(
            due_date(date(2024, 1, 1), MAX_LOAN_DAYS),
            date(2024, 12, 31)
        );
    }

    #[test]
    fn due_date_adds_requested_days() {
        assert_eq!(due_date(date(2024, 1, 1), 14), date(2024, 1, 15));
        assert_eq!(due_date(date(2024, 2, 27), 3), date(2024, 3, 1));
    }

    #[test]
    fn overdue_days_floor() {
        assert_eq!(days_overdue(date(2024, 5, 1), date(2024, 5, 7)), 6);
        assert_eq!(days_overdue(date(2024, 5, 7), date(2024, 5, 7)), 0);
        assert_eq!(days_overdue(date(2024, 5, 8), date(2024, 5, 7)), -1);
    }

    #[test]
    fn loan_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&LoanStatus::Returned).unwrap(),
            "\"RETURNED\""
        );
    }
}
