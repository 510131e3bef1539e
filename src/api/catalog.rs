//! Catalog reference-data endpoints: authors, publishers, branches,
//! languages, collections

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::catalog::{
        Author, Branch, BranchDetails, Collection, CreateAuthor, CreateBranch, CreateCollection,
        CreateLanguage, CreatePublisher, Language, Publisher, UpdateAuthor, UpdateBranch,
        UpdatePublisher,
    },
};

use super::StatusQuery;

// --- Authors ---

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "catalog",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.catalog.create_author(request).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// List authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "catalog",
    params(
        ("status" = Option<String>, Query, description = "active (default), inactive or all")
    ),
    responses(
        (status = 200, description = "List of authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.list_authors(query.filter()?).await?;
    Ok(Json(authors))
}

/// Get an author
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(author))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.update_author(id, request).await?;
    Ok(Json(author))
}

/// Soft-delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deactivated"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Publishers ---

/// Create a publisher with its address
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "catalog",
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 409, description = "CNPJ already registered")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    Json(request): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let publisher = state.services.catalog.create_publisher(request).await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

/// List publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "catalog",
    params(
        ("status" = Option<String>, Query, description = "active (default), inactive or all")
    ),
    responses(
        (status = 200, description = "List of publishers", body = Vec<Publisher>)
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state
        .services
        .catalog
        .list_publishers(query.filter()?)
        .await?;
    Ok(Json(publishers))
}

/// Get a publisher
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.catalog.get_publisher(id).await?;
    Ok(Json(publisher))
}

/// Rename a publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Publisher ID")),
    request_body = UpdatePublisher,
    responses(
        (status = 200, description = "Publisher updated", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePublisher>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.catalog.update_publisher(id, request).await?;
    Ok(Json(publisher))
}

/// Soft-delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 204, description = "Publisher deactivated"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_publisher(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Branches ---

/// Create a branch with its address
#[utoipa::path(
    post,
    path = "/branches",
    tag = "catalog",
    request_body = CreateBranch,
    responses(
        (status = 201, description = "Branch created", body = Branch)
    )
)]
pub async fn create_branch(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBranch>,
) -> AppResult<(StatusCode, Json<Branch>)> {
    let branch = state.services.catalog.create_branch(request).await?;
    Ok((StatusCode::CREATED, Json(branch)))
}

/// List branches
#[utoipa::path(
    get,
    path = "/branches",
    tag = "catalog",
    params(
        ("status" = Option<String>, Query, description = "active (default), inactive or all")
    ),
    responses(
        (status = 200, description = "List of branches", body = Vec<Branch>)
    )
)]
pub async fn list_branches(
    State(state): State<crate::AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Vec<Branch>>> {
    let branches = state
        .services
        .catalog
        .list_branches(query.filter()?)
        .await?;
    Ok(Json(branches))
}

/// Get a branch with its address
#[utoipa::path(
    get,
    path = "/branches/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch details", body = BranchDetails),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn get_branch(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BranchDetails>> {
    let branch = state.services.catalog.get_branch(id).await?;
    Ok(Json(branch))
}

/// Rename a branch
#[utoipa::path(
    put,
    path = "/branches/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Branch ID")),
    request_body = UpdateBranch,
    responses(
        (status = 200, description = "Branch updated", body = Branch),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn update_branch(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBranch>,
) -> AppResult<Json<Branch>> {
    let branch = state.services.catalog.update_branch(id, request).await?;
    Ok(Json(branch))
}

/// Soft-delete a branch
#[utoipa::path(
    delete,
    path = "/branches/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 204, description = "Branch deactivated"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn delete_branch(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_branch(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Languages & collections ---

/// Register a language
#[utoipa::path(
    post,
    path = "/languages",
    tag = "catalog",
    request_body = CreateLanguage,
    responses(
        (status = 201, description = "Language created", body = Language),
        (status = 409, description = "Language code already exists")
    )
)]
pub async fn create_language(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLanguage>,
) -> AppResult<(StatusCode, Json<Language>)> {
    let language = state.services.catalog.create_language(request).await?;
    Ok((StatusCode::CREATED, Json(language)))
}

/// List languages
#[utoipa::path(
    get,
    path = "/languages",
    tag = "catalog",
    responses(
        (status = 200, description = "List of languages", body = Vec<Language>)
    )
)]
pub async fn list_languages(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Language>>> {
    let languages = state.services.catalog.list_languages().await?;
    Ok(Json(languages))
}

/// Create a collection
#[utoipa::path(
    post,
    path = "/collections",
    tag = "catalog",
    request_body = CreateCollection,
    responses(
        (status = 201, description = "Collection created", body = Collection)
    )
)]
pub async fn create_collection(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    let collection = state.services.catalog.create_collection(request).await?;
    Ok((StatusCode::CREATED, Json(collection)))
}

/// List collections
#[utoipa::path(
    get,
    path = "/collections",
    tag = "catalog",
    responses(
        (status = 200, description = "List of collections", body = Vec<Collection>)
    )
)]
pub async fn list_collections(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Collection>>> {
    let collections = state.services.catalog.list_collections().await?;
    Ok(Json(collections))
}
