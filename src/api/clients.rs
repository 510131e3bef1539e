//! Client endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::client::{Client, ClientDetails, CreateClient, UpdateClient},
};

use super::StatusQuery;

/// Create a client (PF or PJ) with its address
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = ClientDetails),
        (status = 400, description = "Missing subtype fields"),
        (status = 409, description = "CPF/CNPJ already registered")
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<ClientDetails>)> {
    let client = state.services.clients.create_client(request).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// List clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    params(
        ("status" = Option<String>, Query, description = "active (default), inactive or all")
    ),
    responses(
        (status = 200, description = "List of clients", body = Vec<Client>)
    )
)]
pub async fn list_clients(
    State(state): State<crate::AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = state.services.clients.list_clients(query.filter()?).await?;
    Ok(Json(clients))
}

/// Get a client with its subtype data
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client details", body = ClientDetails),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ClientDetails>> {
    let client = state.services.clients.get_client(id).await?;
    Ok(Json(client))
}

/// Update a client's contact data
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "clients",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.update_client(id, request).await?;
    Ok(Json(client))
}

/// Soft-delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deactivated"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.clients.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
