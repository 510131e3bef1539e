//! Reserve management service

use crate::{error::AppResult, models::reserve::Reserve, repository::Repository};

#[derive(Clone)]
pub struct ReservesService {
    repository: Repository,
}

impl ReservesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a reserve. No availability check: a reserve never blocks
    /// or unblocks a loan.
    pub async fn create_reserve(
        &self,
        client_id: i32,
        isbn: i64,
        branch_id: i32,
    ) -> AppResult<Reserve> {
        let reserve = self
            .repository
            .reserves
            .create(client_id, isbn, branch_id)
            .await?;

        tracing::info!(reserve_id = reserve.id, client_id, isbn, "reserve created");

        Ok(reserve)
    }

    /// Cancel a reserve
    pub async fn delete_reserve(&self, id: i32) -> AppResult<()> {
        self.repository.reserves.delete(id).await
    }

    /// List all reserves
    pub async fn list_reserves(&self) -> AppResult<Vec<Reserve>> {
        self.repository.reserves.list().await
    }

    /// List a client's reserves
    pub async fn list_for_client(&self, client_id: i32) -> AppResult<Vec<Reserve>> {
        self.repository.clients.get_details(client_id).await?;
        self.repository.reserves.list_for_client(client_id).await
    }
}
