//! Physical book (copy) model and status state machine

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Copy availability status.
///
/// AVAILABLE -> BORROWED on loan creation and back on return; the repair
/// toggle flips AVAILABLE <-> IN_REPAIR; LOST is terminal, set when the
/// copy's loan is declared lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "copy_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CopyStatus {
    Available,
    Borrowed,
    InRepair,
    Lost,
}

/// Physical book row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PhysicalBook {
    pub id: i32,
    pub isbn: i64,
    pub branch_id: i32,
    pub status: CopyStatus,
}

/// Create physical book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePhysicalBook {
    pub isbn: i64,
    pub branch_id: i32,
}

/// Move a copy to another branch
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePhysicalBook {
    pub branch_id: i32,
}

/// Copy joined with its catalog record for display
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PhysicalBookDetails {
    pub id: i32,
    pub isbn: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub edition: Option<String>,
    pub language: String,
    pub branch_name: String,
    pub status: CopyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_format() {
        assert_eq!(
            serde_json::to_string(&CopyStatus::InRepair).unwrap(),
            "\"IN_REPAIR\""
        );
        assert_eq!(
            serde_json::from_str::<CopyStatus>("\"AVAILABLE\"").unwrap(),
            CopyStatus::Available
        );
    }
}
