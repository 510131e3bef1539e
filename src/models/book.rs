//! Book (catalog record) model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book model from database. `review` is the derived mean rating,
/// maintained by the review aggregation flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub isbn: i64,
    pub title: String,
    pub author_id: i32,
    pub publisher_id: i32,
    pub edition: Option<String>,
    pub language_id: i32,
    pub collection_id: Option<i32>,
    pub age_range: Option<i32>,
    #[schema(value_type = Option<f64>)]
    #[serde(with = "rust_decimal::serde::float_option")]
    pub review: Option<Decimal>,
    pub is_active: bool,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub isbn: i64,
    pub title: String,
    pub author_id: i32,
    pub publisher_id: i32,
    pub edition: Option<String>,
    pub language_id: i32,
    pub collection_id: Option<i32>,
    pub age_range: Option<i32>,
}

/// Update book request (partial)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub edition: Option<String>,
    pub language_id: Option<i32>,
    pub collection_id: Option<i32>,
    pub age_range: Option<i32>,
}

/// Soft-delete visibility filter for listing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    Active,
    Inactive,
    All,
}

impl ActiveFilter {
    /// Parse the `status` query parameter (`active`, `inactive`, `all`)
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.unwrap_or("active") {
            "active" => Some(ActiveFilter::Active),
            "inactive" => Some(ActiveFilter::Inactive),
            "all" => Some(ActiveFilter::All),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn review_serializes_as_number() {
        let book = Book {
            isbn: 9_780_000_000_001,
            title: "Dom Casmurro".to_string(),
            author_id: 1,
            publisher_id: 1,
            edition: None,
            language_id: 1,
            collection_id: None,
            age_range: None,
            review: Some(Decimal::from_str("3.5").unwrap()),
            is_active: true,
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["review"], 3.5);
    }

    #[test]
    fn parse_status_filter() {
        assert_eq!(ActiveFilter::parse(None), Some(ActiveFilter::Active));
        assert_eq!(ActiveFilter::parse(Some("inactive")), Some(ActiveFilter::Inactive));
        assert_eq!(ActiveFilter::parse(Some("all")), Some(ActiveFilter::All));
        assert_eq!(ActiveFilter::parse(Some("bogus")), None);
    }
}
