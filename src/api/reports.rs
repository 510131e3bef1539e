//! Reporting endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::loan::OverdueLoan};

#[derive(Debug, Default, Deserialize)]
pub struct OverdueQuery {
    /// Report reference date; defaults to today
    pub as_of: Option<NaiveDate>,
}

/// Overdue loans report
#[derive(Serialize, ToSchema)]
pub struct OverdueReport {
    pub overdue_loans: Vec<OverdueLoan>,
    pub count: usize,
}

/// Report active loans past their due date
#[utoipa::path(
    get,
    path = "/reports/overdue",
    tag = "reports",
    params(
        ("as_of" = Option<NaiveDate>, Query, description = "Reference date (default: today)")
    ),
    responses(
        (status = 200, description = "Overdue loans report", body = OverdueReport)
    )
)]
pub async fn get_overdue_loans(
    State(state): State<crate::AppState>,
    Query(query): Query<OverdueQuery>,
) -> AppResult<Json<OverdueReport>> {
    let overdue_loans = state
        .services
        .reports
        .list_overdue_loans(query.as_of)
        .await?;

    Ok(Json(OverdueReport {
        count: overdue_loans.len(),
        overdue_loans,
    }))
}
