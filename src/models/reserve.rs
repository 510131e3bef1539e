//! Reserve model. A reserve is a pure record: existence means active,
//! deletion means cancellation. There is no fulfillment linkage to loans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reserve row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reserve {
    pub id: i32,
    pub isbn: i64,
    pub branch_id: i32,
    pub client_id: i32,
    pub reserve_date: DateTime<Utc>,
}
