//! Catalog reference-data repository: authors, publishers, branches,
//! languages, collections

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        address::Address,
        book::ActiveFilter,
        catalog::{
            Author, Branch, BranchDetails, Collection, CreateAuthor, CreateCollection,
            CreateLanguage, Language, Publisher, UpdateAuthor, UpdateBranch, UpdatePublisher,
        },
    },
};

fn active_bind(filter: ActiveFilter) -> Option<bool> {
    match filter {
        ActiveFilter::Active => Some(true),
        ActiveFilter::Inactive => Some(false),
        ActiveFilter::All => None,
    }
}

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // --- Authors ---

    pub async fn create_author(&self, author: &CreateAuthor) -> AppResult<Author> {
        Ok(sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, middle_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.middle_name)
        .bind(&author.last_name)
        .fetch_one(&self.pool)
        .await?)
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    pub async fn list_authors(&self, filter: ActiveFilter) -> AppResult<Vec<Author>> {
        Ok(sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE $1::boolean IS NULL OR is_active = $1 ORDER BY last_name, first_name",
        )
        .bind(active_bind(filter))
        .fetch_all(&self.pool)
        .await?)
    }

    /// Update an author (partial)
    pub async fn update_author(&self, id: i32, update: &UpdateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET first_name = COALESCE($2, first_name),
                middle_name = COALESCE($3, middle_name),
                last_name = COALESCE($4, last_name)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.first_name)
        .bind(&update.middle_name)
        .bind(&update.last_name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    pub async fn soft_delete_author(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE authors SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Author with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // --- Publishers ---

    /// Insert the publisher row; the address is inserted first by the
    /// service inside the same transaction.
    pub async fn insert_publisher(
        &self,
        conn: &mut PgConnection,
        cnpj: &str,
        name: &str,
        address_id: i32,
    ) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            r#"
            INSERT INTO publishers (cnpj, name, address_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(cnpj)
        .bind(name)
        .bind(address_id)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("A publisher with this CNPJ already exists".to_string())
            }
            other => AppError::Database(other),
        })
    }

    pub async fn get_publisher(&self, id: i32) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher with id {} not found", id)))
    }

    pub async fn list_publishers(&self, filter: ActiveFilter) -> AppResult<Vec<Publisher>> {
        Ok(sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE $1::boolean IS NULL OR is_active = $1 ORDER BY name",
        )
        .bind(active_bind(filter))
        .fetch_all(&self.pool)
        .await?)
    }

    /// Rename a publisher
    pub async fn update_publisher(&self, id: i32, update: &UpdatePublisher) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            r#"
            UPDATE publishers
            SET name = COALESCE($2, name)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Publisher with id {} not found", id)))
    }

    pub async fn soft_delete_publisher(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE publishers SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Publisher with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // --- Branches ---

    pub async fn insert_branch(
        &self,
        conn: &mut PgConnection,
        name: &str,
        address_id: i32,
    ) -> AppResult<Branch> {
        Ok(sqlx::query_as::<_, Branch>(
            r#"
            INSERT INTO branches (name, address_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(address_id)
        .fetch_one(conn)
        .await?)
    }

    pub async fn get_branch(&self, id: i32) -> AppResult<BranchDetails> {
        let row = sqlx::query(
            r#"
            SELECT br.id, br.name, br.is_active,
                   a.id AS address_id, a.road, a.neighbourhood, a.number,
                   a.city, a.state, a.zip_code, a.complement
            FROM branches br
            JOIN addresses a ON br.address_id = a.id
            WHERE br.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Branch with id {} not found", id)))?;

        use sqlx::Row;
        Ok(BranchDetails {
            id: row.get("id"),
            name: row.get("name"),
            is_active: row.get("is_active"),
            address: Address {
                id: row.get("address_id"),
                road: row.get("road"),
                neighbourhood: row.get("neighbourhood"),
                number: row.get("number"),
                city: row.get("city"),
                state: row.get("state"),
                zip_code: row.get("zip_code"),
                complement: row.get("complement"),
            },
        })
    }

    pub async fn list_branches(&self, filter: ActiveFilter) -> AppResult<Vec<Branch>> {
        Ok(sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE $1::boolean IS NULL OR is_active = $1 ORDER BY name",
        )
        .bind(active_bind(filter))
        .fetch_all(&self.pool)
        .await?)
    }

    /// Rename a branch
    pub async fn update_branch(&self, id: i32, update: &UpdateBranch) -> AppResult<Branch> {
        sqlx::query_as::<_, Branch>(
            r#"
            UPDATE branches
            SET name = COALESCE($2, name)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Branch with id {} not found", id)))
    }

    pub async fn soft_delete_branch(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE branches SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Branch with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // --- Languages ---

    pub async fn create_language(&self, language: &CreateLanguage) -> AppResult<Language> {
        sqlx::query_as::<_, Language>(
            "INSERT INTO languages (code, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(&language.code)
        .bind(&language.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Language code {} already exists", language.code))
            }
            other => AppError::Database(other),
        })
    }

    pub async fn list_languages(&self) -> AppResult<Vec<Language>> {
        Ok(
            sqlx::query_as::<_, Language>("SELECT * FROM languages ORDER BY name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    // --- Collections ---

    pub async fn create_collection(&self, collection: &CreateCollection) -> AppResult<Collection> {
        Ok(sqlx::query_as::<_, Collection>(
            "INSERT INTO collections (name) VALUES ($1) RETURNING *",
        )
        .bind(&collection.name)
        .fetch_one(&self.pool)
        .await?)
    }

    pub async fn list_collections(&self) -> AppResult<Vec<Collection>> {
        Ok(
            sqlx::query_as::<_, Collection>("SELECT * FROM collections ORDER BY name")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
