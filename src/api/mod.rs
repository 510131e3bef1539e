//! API handlers for Biblioteca REST endpoints

pub mod books;
pub mod catalog;
pub mod clients;
pub mod copies;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod reports;
pub mod reserves;
pub mod reviews;

use serde::Deserialize;

use crate::{error::AppError, models::book::ActiveFilter};

/// `?status=active|inactive|all` query parameter shared by listing
/// endpoints over soft-deleted entities
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    pub fn filter(&self) -> Result<ActiveFilter, AppError> {
        ActiveFilter::parse(self.status.as_deref()).ok_or_else(|| {
            AppError::BadRequest(
                "Invalid 'status' parameter. Use 'active', 'inactive', or 'all'".to_string(),
            )
        })
    }
}
