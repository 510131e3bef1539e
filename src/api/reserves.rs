//! Reserve endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::reserve::Reserve};

#[derive(Serialize, ToSchema)]
pub struct ReserveResponse {
    pub message: String,
    pub reserve: Reserve,
}

/// Create a reserve for a client on a book at a branch
#[utoipa::path(
    post,
    path = "/reserves/{client_id}/{isbn}/{branch_id}",
    tag = "reserves",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
        ("isbn" = i64, Path, description = "Book ISBN"),
        ("branch_id" = i32, Path, description = "Branch ID")
    ),
    responses(
        (status = 200, description = "Reserve created", body = ReserveResponse),
        (status = 400, description = "Unknown client, book or branch")
    )
)]
pub async fn create_reserve(
    State(state): State<crate::AppState>,
    Path((client_id, isbn, branch_id)): Path<(i32, i64, i32)>,
) -> AppResult<Json<ReserveResponse>> {
    let reserve = state
        .services
        .reserves
        .create_reserve(client_id, isbn, branch_id)
        .await?;

    Ok(Json(ReserveResponse {
        message: "Reserve created!".to_string(),
        reserve,
    }))
}

/// Cancel a reserve
#[utoipa::path(
    delete,
    path = "/reserves/{id}",
    tag = "reserves",
    params(
        ("id" = i32, Path, description = "Reserve ID")
    ),
    responses(
        (status = 204, description = "Reserve deleted"),
        (status = 404, description = "Reserve not found")
    )
)]
pub async fn delete_reserve(
    State(state): State<crate::AppState>,
    Path(reserve_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.reserves.delete_reserve(reserve_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all reserves
#[utoipa::path(
    get,
    path = "/reserves",
    tag = "reserves",
    responses(
        (status = 200, description = "List of reserves", body = Vec<Reserve>)
    )
)]
pub async fn list_reserves(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Reserve>>> {
    let reserves = state.services.reserves.list_reserves().await?;
    Ok(Json(reserves))
}

/// List a client's reserves
#[utoipa::path(
    get,
    path = "/clients/{id}/reserves",
    tag = "reserves",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client's reserves", body = Vec<Reserve>),
        (status = 404, description = "Client not found")
    )
)]
pub async fn list_client_reserves(
    State(state): State<crate::AppState>,
    Path(client_id): Path<i32>,
) -> AppResult<Json<Vec<Reserve>>> {
    let reserves = state.services.reserves.list_for_client(client_id).await?;
    Ok(Json(reserves))
}
