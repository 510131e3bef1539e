//! Book (catalog record) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::StatusQuery;

/// Create a catalog record
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Unknown author, publisher, language or collection"),
        (status = 409, description = "ISBN already registered")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create_book(request).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List catalog records
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("status" = Option<String>, Query, description = "active (default), inactive or all")
    ),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_books(query.filter()?).await?;
    Ok(Json(books))
}

/// Get a catalog record by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = i64, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(isbn).await?;
    Ok(Json(book))
}

/// Update a catalog record
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = i64, Path, description = "Book ISBN")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<i64>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update_book(isbn, request).await?;
    Ok(Json(book))
}

/// Soft-delete a catalog record
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = i64, Path, description = "Book ISBN")
    ),
    responses(
        (status = 204, description = "Book deactivated"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete_book(isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
