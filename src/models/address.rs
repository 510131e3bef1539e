//! Address model shared by clients, publishers and branches

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Address model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Address {
    pub id: i32,
    pub road: String,
    pub neighbourhood: String,
    pub number: Option<i32>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}

/// Address payload nested in client/publisher/branch creation
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAddress {
    pub road: String,
    pub neighbourhood: String,
    pub number: Option<i32>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}
