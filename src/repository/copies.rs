//! Physical book (copy) repository: CRUD plus the status state machine

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::ActiveFilter,
        copy::{CopyStatus, CreatePhysicalBook, PhysicalBook, PhysicalBookDetails},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT pb.id, pb.isbn, b.title, pb.status,
           a.last_name || ', ' || a.first_name AS author,
           p.name AS publisher, b.edition, l.name AS language,
           br.name AS branch_name
    FROM physical_books pb
    JOIN books b ON pb.isbn = b.isbn
    JOIN authors a ON b.author_id = a.id
    JOIN publishers p ON b.publisher_id = p.id
    JOIN languages l ON b.language_id = l.id
    JOIN branches br ON pb.branch_id = br.id
"#;

#[derive(Clone)]
pub struct CopiesRepository {
    pool: Pool<Postgres>,
}

impl CopiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Register a new copy of a book at a branch
    pub async fn create(&self, copy: &CreatePhysicalBook) -> AppResult<PhysicalBook> {
        sqlx::query_as::<_, PhysicalBook>(
            r#"
            INSERT INTO physical_books (isbn, branch_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(copy.isbn)
        .bind(copy.branch_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, "Unknown book or branch"))
    }

    /// Get copy by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<PhysicalBook> {
        sqlx::query_as::<_, PhysicalBook>("SELECT * FROM physical_books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Physical book with id {} not found", id)))
    }

    /// Get copy joined with its catalog record
    pub async fn get_details(&self, id: i32) -> AppResult<PhysicalBookDetails> {
        let sql = format!("{} WHERE pb.id = $1", DETAILS_SELECT);

        sqlx::query_as::<_, PhysicalBookDetails>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Physical book with id {} not found", id)))
    }

    /// List copies, filtered on the catalog record's soft-delete flag
    pub async fn list(&self, filter: ActiveFilter) -> AppResult<Vec<PhysicalBookDetails>> {
        let active: Option<bool> = match filter {
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
            ActiveFilter::All => None,
        };
        let sql = format!(
            "{} WHERE $1::boolean IS NULL OR b.is_active = $1 ORDER BY pb.id",
            DETAILS_SELECT
        );

        Ok(sqlx::query_as::<_, PhysicalBookDetails>(&sql)
            .bind(active)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Move a copy to another branch
    pub async fn update_branch(&self, id: i32, branch_id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE physical_books SET branch_id = $1 WHERE id = $2")
            .bind(branch_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_constraint(e, "Unknown branch"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Physical book with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Claim a copy for a loan. The status check and the write are one
    /// conditional UPDATE so two concurrent loans cannot both claim the
    /// same copy.
    pub async fn mark_borrowed(&self, conn: &mut PgConnection, id: i32) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE physical_books SET status = 'BORROWED' WHERE id = $1 AND status = 'AVAILABLE'",
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        let status: Option<CopyStatus> =
            sqlx::query_scalar("SELECT status FROM physical_books WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        match status {
            None => Err(AppError::NotFound(format!(
                "Physical book with id {} not found",
                id
            ))),
            Some(_) => Err(AppError::Conflict("Book not available to loan".to_string())),
        }
    }

    /// Put a copy back on the shelf. No precondition on the current
    /// status; the loan record guards the transition.
    pub async fn mark_returned(&self, conn: &mut PgConnection, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE physical_books SET status = 'AVAILABLE' WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Physical book with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Terminal state for a copy whose loan was declared lost
    pub async fn mark_lost(&self, conn: &mut PgConnection, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE physical_books SET status = 'LOST' WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Physical book with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Flip a copy between IN_REPAIR and AVAILABLE. Borrowed and lost
    /// copies cannot enter repair.
    pub async fn toggle_repair(&self, id: i32) -> AppResult<CopyStatus> {
        let status: Option<CopyStatus> = sqlx::query_scalar(
            r#"
            UPDATE physical_books
            SET status = CASE WHEN status = 'IN_REPAIR'
                              THEN 'AVAILABLE'::copy_status
                              ELSE 'IN_REPAIR'::copy_status END
            WHERE id = $1 AND status IN ('AVAILABLE', 'IN_REPAIR')
            RETURNING status
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(status) = status {
            return Ok(status);
        }

        // Distinguish a missing copy from one in a non-toggleable state
        let current = self.get_by_id(id).await?;
        Err(AppError::Conflict(format!(
            "Cannot toggle repair on a {:?} copy",
            current.status
        )))
    }
}
