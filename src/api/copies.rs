//! Physical book (copy) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::copy::{CopyStatus, CreatePhysicalBook, PhysicalBook, PhysicalBookDetails, UpdatePhysicalBook},
};

use super::StatusQuery;

/// Copy listing response
#[derive(Serialize, ToSchema)]
pub struct PhysicalBookListResponse {
    pub physical_books: Vec<PhysicalBookDetails>,
}

/// Repair toggle response
#[derive(Serialize, ToSchema)]
pub struct RepairResponse {
    pub message: String,
    pub status: CopyStatus,
}

/// Register a new copy of a book at a branch
#[utoipa::path(
    post,
    path = "/physicalBooks",
    tag = "physical_books",
    request_body = CreatePhysicalBook,
    responses(
        (status = 201, description = "Copy created", body = PhysicalBook),
        (status = 400, description = "Unknown book or branch")
    )
)]
pub async fn create_physical_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreatePhysicalBook>,
) -> AppResult<(StatusCode, Json<PhysicalBook>)> {
    let copy = state.services.books.create_copy(request).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// List copies with their catalog details
#[utoipa::path(
    get,
    path = "/physicalBooks",
    tag = "physical_books",
    params(
        ("status" = Option<String>, Query, description = "active (default), inactive or all")
    ),
    responses(
        (status = 200, description = "List of copies", body = PhysicalBookListResponse),
        (status = 400, description = "Invalid status parameter")
    )
)]
pub async fn list_physical_books(
    State(state): State<crate::AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<PhysicalBookListResponse>> {
    let physical_books = state.services.books.list_copies(query.filter()?).await?;
    Ok(Json(PhysicalBookListResponse { physical_books }))
}

/// Get a copy with its catalog details
#[utoipa::path(
    get,
    path = "/physicalBooks/{id}",
    tag = "physical_books",
    params(
        ("id" = i32, Path, description = "Physical book ID")
    ),
    responses(
        (status = 200, description = "Copy details", body = PhysicalBookDetails),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_physical_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PhysicalBookDetails>> {
    let copy = state.services.books.get_copy(id).await?;
    Ok(Json(copy))
}

/// Move a copy to another branch
#[utoipa::path(
    put,
    path = "/physicalBooks/{id}",
    tag = "physical_books",
    params(
        ("id" = i32, Path, description = "Physical book ID")
    ),
    request_body = UpdatePhysicalBook,
    responses(
        (status = 200, description = "Copy updated", body = PhysicalBookDetails),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn update_physical_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePhysicalBook>,
) -> AppResult<Json<PhysicalBookDetails>> {
    state.services.books.move_copy(id, request.branch_id).await?;
    let copy = state.services.books.get_copy(id).await?;
    Ok(Json(copy))
}

/// Toggle a copy between IN_REPAIR and AVAILABLE
#[utoipa::path(
    put,
    path = "/physicalBooks/{id}/repair",
    tag = "physical_books",
    params(
        ("id" = i32, Path, description = "Physical book ID")
    ),
    responses(
        (status = 200, description = "Status toggled", body = RepairResponse),
        (status = 404, description = "Copy not found"),
        (status = 409, description = "Copy is borrowed or lost")
    )
)]
pub async fn toggle_repair(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RepairResponse>> {
    let status = state.services.books.toggle_repair(id).await?;

    Ok(Json(RepairResponse {
        message: "Physical Book Status successfully updated".to_string(),
        status,
    }))
}
