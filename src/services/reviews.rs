//! Review aggregation service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::review::{self, BookReview, ReviewEntry},
    repository::Repository,
};

/// Parameters of a review submission after request decoding
#[derive(Debug, Clone)]
pub struct SubmitReview {
    pub client_id: i32,
    pub isbn: i64,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Submit a review. Archives the client's previous active review of
    /// the book, inserts the new one and recomputes the book's mean
    /// rating over every review ever written for it, all in one
    /// transaction. Returns the new mean.
    pub async fn submit_review(&self, request: SubmitReview) -> AppResult<(BookReview, Decimal)> {
        // Validated before any write begins
        if !review::validate_rating(request.rating) {
            return Err(AppError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let mut tx = self.repository.pool.begin().await?;

        if !self.repository.books.exists(&mut tx, request.isbn).await? {
            return Err(AppError::NotFound(format!(
                "Book with ISBN {} not found",
                request.isbn
            )));
        }
        if !self
            .repository
            .clients
            .exists(&mut tx, request.client_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Client with id {} not found",
                request.client_id
            )));
        }

        self.repository
            .reviews
            .archive_active(&mut tx, request.client_id, request.isbn)
            .await?;

        let created = self
            .repository
            .reviews
            .insert(
                &mut tx,
                request.client_id,
                request.isbn,
                request.rating,
                request.comment.as_deref(),
            )
            .await?;

        let mean = review::round_mean(
            self.repository
                .reviews
                .mean_rating(&mut tx, request.isbn)
                .await?,
        );
        self.repository
            .reviews
            .set_book_rating(&mut tx, request.isbn, mean)
            .await?;

        tx.commit().await?;

        tracing::info!(
            review_id = created.id,
            isbn = request.isbn,
            rating = request.rating,
            mean = %mean,
            "review posted"
        );

        Ok((created, mean))
    }

    /// Active reviews of a book, newest first
    pub async fn list_for_book(&self, isbn: i64) -> AppResult<Vec<ReviewEntry>> {
        self.repository.reviews.list_for_book(isbn).await
    }
}
