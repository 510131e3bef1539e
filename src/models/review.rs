//! Book review model and rating aggregation rules

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Review row from database. At most one row per (client, isbn) has
/// `is_active = true`; superseded reviews are archived, not deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookReview {
    pub id: i32,
    pub client_id: i32,
    pub isbn: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub review_date: DateTime<Utc>,
    pub is_active: bool,
}

/// A review as listed by `/api/reviews/book/{isbn}`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewEntry {
    #[serde(rename = "Rating")]
    pub rating: i32,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "Client")]
    pub client: String,
}

/// Valid rating range, checked before any write
pub fn validate_rating(rating: i32) -> bool {
    (1..=5).contains(&rating)
}

/// Round a mean rating to the one decimal place the books table stores
/// (NUMERIC(2,1)); halves round away from zero, matching the database.
pub fn round_mean(mean: Decimal) -> Decimal {
    mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn rating_bounds() {
        assert!(!validate_rating(0));
        assert!(validate_rating(1));
        assert!(validate_rating(5));
        assert!(!validate_rating(6));
    }

    #[test]
    fn mean_rounds_to_one_decimal() {
        assert_eq!(round_mean(d("3.0")), d("3.0"));
        assert_eq!(round_mean(d("3.25")), d("3.3"));
        assert_eq!(round_mean(d("4.44")), d("4.4"));
        assert_eq!(round_mean(d("4.46")), d("4.5"));
    }

    #[test]
    fn mean_of_four_and_two_is_three() {
        let mean = (Decimal::from(4) + Decimal::from(2)) / Decimal::from(2);
        assert_eq!(round_mean(mean), d("3.0"));
    }
}
