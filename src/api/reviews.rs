//! Review endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::review::ReviewEntry, services::reviews::SubmitReview};

/// Create review request
#[derive(Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    /// Reviewing client
    #[serde(rename = "idClient")]
    pub id_client: i32,
    /// Reviewed book
    #[serde(rename = "ISBN")]
    pub isbn: i64,
    /// Rating from 1 to 5
    #[serde(rename = "Rating")]
    pub rating: i32,
    /// Optional comment
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

/// Review creation response with the recomputed book mean
#[derive(Serialize, ToSchema)]
pub struct ReviewResponse {
    pub message: String,
    #[schema(value_type = f64)]
    #[serde(with = "rust_decimal::serde::float")]
    pub new_book_rating: Decimal,
}

/// Review listing response
#[derive(Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewEntry>,
}

/// Post a review and update the book's mean rating
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review posted", body = ReviewResponse),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Book or client not found")
    )
)]
pub async fn create_review(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let (_, mean) = state
        .services
        .reviews
        .submit_review(SubmitReview {
            client_id: request.id_client,
            isbn: request.isbn,
            rating: request.rating,
            comment: request.comment,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            message: "Review posted successfully".to_string(),
            new_book_rating: mean,
        }),
    ))
}

/// List the active reviews of a book
#[utoipa::path(
    get,
    path = "/reviews/book/{isbn}",
    tag = "reviews",
    params(
        ("isbn" = i64, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Reviews of the book", body = ReviewListResponse)
    )
)]
pub async fn get_book_reviews(
    State(state): State<crate::AppState>,
    Path(isbn): Path<i64>,
) -> AppResult<Json<ReviewListResponse>> {
    let reviews = state.services.reviews.list_for_book(isbn).await?;
    Ok(Json(ReviewListResponse { reviews }))
}
