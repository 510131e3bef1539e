//! Clients repository: base rows plus PF/PJ subtype rows

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::ActiveFilter,
        client::{Client, ClientDetails, ClientPf, ClientPj, ClientType, UpdateClient},
    },
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Existence check used inside unit-of-work operations
    pub async fn exists(&self, conn: &mut PgConnection, id: i32) -> AppResult<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(id)
                .fetch_one(conn)
                .await?,
        )
    }

    /// Get client with its subtype row
    pub async fn get_details(&self, id: i32) -> AppResult<ClientDetails> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client with id {} not found", id)))?;

        let (pf, pj) = match client.client_type {
            ClientType::PF => {
                let pf =
                    sqlx::query_as::<_, ClientPf>("SELECT * FROM clients_pf WHERE client_id = $1")
                        .bind(id)
                        .fetch_optional(&self.pool)
                        .await?;
                (pf, None)
            }
            ClientType::PJ => {
                let pj =
                    sqlx::query_as::<_, ClientPj>("SELECT * FROM clients_pj WHERE client_id = $1")
                        .bind(id)
                        .fetch_optional(&self.pool)
                        .await?;
                (None, pj)
            }
        };

        Ok(ClientDetails { client, pf, pj })
    }

    /// List clients filtered on the soft-delete flag
    pub async fn list(&self, filter: ActiveFilter) -> AppResult<Vec<Client>> {
        let active: Option<bool> = match filter {
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
            ActiveFilter::All => None,
        };

        Ok(sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE $1::boolean IS NULL OR is_active = $1 ORDER BY id",
        )
        .bind(active)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Insert the client base row
    pub async fn insert_client(
        &self,
        conn: &mut PgConnection,
        client_type: ClientType,
        address_id: i32,
        phone: &str,
        email: &str,
    ) -> AppResult<Client> {
        Ok(sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (client_type, address_id, phone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(client_type)
        .bind(address_id)
        .bind(phone)
        .bind(email)
        .fetch_one(conn)
        .await?)
    }

    /// Insert the PF subtype row
    pub async fn insert_pf(&self, conn: &mut PgConnection, pf: &ClientPf) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clients_pf (client_id, cpf, first_name, middle_name, last_name, birthdate)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(pf.client_id)
        .bind(&pf.cpf)
        .bind(&pf.first_name)
        .bind(&pf.middle_name)
        .bind(&pf.last_name)
        .bind(pf.birthdate)
        .execute(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("A client with this CPF already exists".to_string())
            }
            other => AppError::Database(other),
        })?;

        Ok(())
    }

    /// Insert the PJ subtype row
    pub async fn insert_pj(&self, conn: &mut PgConnection, pj: &ClientPj) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clients_pj (client_id, cnpj, legal_name, fantasy_name)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(pj.client_id)
        .bind(&pj.cnpj)
        .bind(&pj.legal_name)
        .bind(&pj.fantasy_name)
        .execute(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("A client with this CNPJ already exists".to_string())
            }
            other => AppError::Database(other),
        })?;

        Ok(())
    }

    /// Update contact data
    pub async fn update(&self, id: i32, update: &UpdateClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET phone = COALESCE($2, phone),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.phone)
        .bind(&update.email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client with id {} not found", id)))
    }

    /// Soft-delete a client
    pub async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE clients SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Client with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
