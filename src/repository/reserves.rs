//! Reserves repository. Reserves are informational records; creation is
//! an unconditional insert and cancellation is the only hard delete in
//! the system.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reserve::Reserve,
};

#[derive(Clone)]
pub struct ReservesRepository {
    pool: Pool<Postgres>,
}

impl ReservesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a reserve. No availability check and no uniqueness: a
    /// client may hold several reserves for the same book and branch.
    pub async fn create(&self, client_id: i32, isbn: i64, branch_id: i32) -> AppResult<Reserve> {
        sqlx::query_as::<_, Reserve>(
            r#"
            INSERT INTO reserves (isbn, branch_id, client_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(isbn)
        .bind(branch_id)
        .bind(client_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, "Unknown client, book or branch"))
    }

    /// Cancel a reserve by deleting the row
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reserves WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Reserve with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// List all reserves, oldest first
    pub async fn list(&self) -> AppResult<Vec<Reserve>> {
        Ok(
            sqlx::query_as::<_, Reserve>("SELECT * FROM reserves ORDER BY reserve_date")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// List a client's reserves
    pub async fn list_for_client(&self, client_id: i32) -> AppResult<Vec<Reserve>> {
        Ok(sqlx::query_as::<_, Reserve>(
            "SELECT * FROM reserves WHERE client_id = $1 ORDER BY reserve_date",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
