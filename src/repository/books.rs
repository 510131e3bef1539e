//! Books repository: catalog records with soft delete

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{ActiveFilter, Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Existence check used inside unit-of-work operations
    pub async fn exists(&self, conn: &mut PgConnection, isbn: i64) -> AppResult<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(conn)
                .await?,
        )
    }

    /// Get book by ISBN
    pub async fn get_by_isbn(&self, isbn: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE isbn = $1")
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// List books filtered on the soft-delete flag
    pub async fn list(&self, filter: ActiveFilter) -> AppResult<Vec<Book>> {
        let active: Option<bool> = match filter {
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
            ActiveFilter::All => None,
        };

        Ok(sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE $1::boolean IS NULL OR is_active = $1 ORDER BY title",
        )
        .bind(active)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Create a catalog record
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, author_id, publisher_id, edition,
                               language_id, collection_id, age_range)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(book.isbn)
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(&book.edition)
        .bind(book.language_id)
        .bind(book.collection_id)
        .bind(book.age_range)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Book with ISBN {} already exists", book.isbn))
            }
            other => AppError::from_constraint(
                other,
                "Unknown author, publisher, language or collection",
            ),
        })
    }

    /// Update a catalog record (partial)
    pub async fn update(&self, isbn: i64, update: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE($2, title),
                author_id = COALESCE($3, author_id),
                publisher_id = COALESCE($4, publisher_id),
                edition = COALESCE($5, edition),
                language_id = COALESCE($6, language_id),
                collection_id = COALESCE($7, collection_id),
                age_range = COALESCE($8, age_range)
            WHERE isbn = $1
            RETURNING *
            "#,
        )
        .bind(isbn)
        .bind(&update.title)
        .bind(update.author_id)
        .bind(update.publisher_id)
        .bind(&update.edition)
        .bind(update.language_id)
        .bind(update.collection_id)
        .bind(update.age_range)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, "Unknown author, publisher, language or collection")
        })?
        .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Soft-delete a catalog record
    pub async fn soft_delete(&self, isbn: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE books SET is_active = FALSE WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book with ISBN {} not found",
                isbn
            )));
        }
        Ok(())
    }
}
