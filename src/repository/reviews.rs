//! Reviews repository: archive-then-insert writes and rating aggregation

use rust_decimal::Decimal;
use sqlx::{PgConnection, Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::{
        client::ClientName,
        review::{BookReview, ReviewEntry},
    },
};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Archive the client's current active review of a book, if any.
    /// Part of the submit-review transaction.
    pub async fn archive_active(
        &self,
        conn: &mut PgConnection,
        client_id: i32,
        isbn: i64,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE book_reviews
            SET is_active = FALSE
            WHERE client_id = $1 AND isbn = $2 AND is_active
            "#,
        )
        .bind(client_id)
        .bind(isbn)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Insert a new active review
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        client_id: i32,
        isbn: i64,
        rating: i32,
        comment: Option<&str>,
    ) -> AppResult<BookReview> {
        Ok(sqlx::query_as::<_, BookReview>(
            r#"
            INSERT INTO book_reviews (client_id, isbn, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(isbn)
        .bind(rating)
        .bind(comment)
        .fetch_one(conn)
        .await?)
    }

    /// Mean rating over every review of the book, archived rows
    /// included: superseded ratings still count toward the mean.
    pub async fn mean_rating(&self, conn: &mut PgConnection, isbn: i64) -> AppResult<Decimal> {
        let mean: Option<Decimal> =
            sqlx::query_scalar("SELECT AVG(rating) FROM book_reviews WHERE isbn = $1")
                .bind(isbn)
                .fetch_one(conn)
                .await?;

        // The caller inserts a review before recomputing, so the set is
        // never empty
        Ok(mean.unwrap_or_default())
    }

    /// Write the recomputed mean into the book's derived rating column
    pub async fn set_book_rating(
        &self,
        conn: &mut PgConnection,
        isbn: i64,
        rating: Decimal,
    ) -> AppResult<()> {
        sqlx::query("UPDATE books SET review = $1 WHERE isbn = $2")
            .bind(rating)
            .bind(isbn)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Active reviews of a book, newest first, with the reviewer's
    /// display name
    pub async fn list_for_book(&self, isbn: i64) -> AppResult<Vec<ReviewEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT r.rating, r.comment, r.review_date,
                   c.client_type, pf.first_name, pf.middle_name, pf.last_name,
                   pj.legal_name, pj.fantasy_name
            FROM book_reviews r
            JOIN clients c ON r.client_id = c.id
            LEFT JOIN clients_pf pf ON c.id = pf.client_id
            LEFT JOIN clients_pj pj ON c.id = pj.client_id
            WHERE r.isbn = $1 AND r.is_active
            ORDER BY r.review_date DESC
            "#,
        )
        .bind(isbn)
        .fetch_all(&self.pool)
        .await?;

        let reviews = rows
            .into_iter()
            .map(|row| {
                let name = ClientName {
                    client_type: row.get("client_type"),
                    first_name: row.get("first_name"),
                    middle_name: row.get("middle_name"),
                    last_name: row.get("last_name"),
                    legal_name: row.get("legal_name"),
                    fantasy_name: row.get("fantasy_name"),
                };
                ReviewEntry {
                    rating: row.get("rating"),
                    comment: row.get("comment"),
                    date: row.get("review_date"),
                    client: name.full(),
                }
            })
            .collect();

        Ok(reviews)
    }
}
