//! Addresses repository. Addresses are always created as part of a
//! client, publisher or branch creation transaction.

use sqlx::PgConnection;

use crate::{error::AppResult, models::address::CreateAddress};

/// Stateless: every insert runs on the caller's transaction connection.
#[derive(Clone, Default)]
pub struct AddressesRepository;

impl AddressesRepository {
    pub fn new() -> Self {
        Self
    }

    /// Insert an address row, returning its id
    pub async fn insert(&self, conn: &mut PgConnection, address: &CreateAddress) -> AppResult<i32> {
        Ok(sqlx::query_scalar(
            r#"
            INSERT INTO addresses (road, neighbourhood, number, city, state, zip_code, complement)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&address.road)
        .bind(&address.neighbourhood)
        .bind(address.number)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip_code)
        .bind(&address.complement)
        .fetch_one(conn)
        .await?)
    }
}
