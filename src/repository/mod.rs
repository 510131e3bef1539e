//! Repository layer for database operations
//!
//! Repositories hold the shared pool for single-statement operations.
//! Methods that participate in a multi-write unit of work take a
//! `&mut PgConnection` instead, so the service layer can run them inside
//! one transaction and commit or roll back at the operation boundary.

pub mod addresses;
pub mod books;
pub mod catalog;
pub mod clients;
pub mod copies;
pub mod loans;
pub mod reserves;
pub mod reviews;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub addresses: addresses::AddressesRepository,
    pub catalog: catalog::CatalogRepository,
    pub books: books::BooksRepository,
    pub clients: clients::ClientsRepository,
    pub copies: copies::CopiesRepository,
    pub loans: loans::LoansRepository,
    pub reserves: reserves::ReservesRepository,
    pub reviews: reviews::ReviewsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            addresses: addresses::AddressesRepository::new(),
            catalog: catalog::CatalogRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            copies: copies::CopiesRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            reserves: reserves::ReservesRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            pool,
        }
    }
}
