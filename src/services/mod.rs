//! Business logic services

pub mod books;
pub mod catalog;
pub mod clients;
pub mod loans;
pub mod reports;
pub mod reserves;
pub mod reviews;

use crate::{config::LoansConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub books: books::BooksService,
    pub clients: clients::ClientsService,
    pub loans: loans::LoansService,
    pub reserves: reserves::ReservesService,
    pub reviews: reviews::ReviewsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, loans_config: LoansConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            clients: clients::ClientsService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone(), loans_config),
            reserves: reserves::ReservesService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository),
        }
    }
}
