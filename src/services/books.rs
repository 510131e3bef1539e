//! Book catalog and physical copy service

use crate::{
    error::AppResult,
    models::{
        book::{ActiveFilter, Book, CreateBook, UpdateBook},
        copy::{CopyStatus, CreatePhysicalBook, PhysicalBook, PhysicalBookDetails},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // --- Catalog records ---

    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        self.repository.books.create(&book).await
    }

    pub async fn get_book(&self, isbn: i64) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn).await
    }

    pub async fn list_books(&self, filter: ActiveFilter) -> AppResult<Vec<Book>> {
        self.repository.books.list(filter).await
    }

    pub async fn update_book(&self, isbn: i64, update: UpdateBook) -> AppResult<Book> {
        self.repository.books.update(isbn, &update).await
    }

    pub async fn delete_book(&self, isbn: i64) -> AppResult<()> {
        self.repository.books.soft_delete(isbn).await
    }

    // --- Physical copies ---

    pub async fn create_copy(&self, copy: CreatePhysicalBook) -> AppResult<PhysicalBook> {
        self.repository.copies.create(&copy).await
    }

    pub async fn get_copy(&self, id: i32) -> AppResult<PhysicalBookDetails> {
        self.repository.copies.get_details(id).await
    }

    pub async fn list_copies(&self, filter: ActiveFilter) -> AppResult<Vec<PhysicalBookDetails>> {
        self.repository.copies.list(filter).await
    }

    pub async fn move_copy(&self, id: i32, branch_id: i32) -> AppResult<()> {
        self.repository.copies.update_branch(id, branch_id).await
    }

    /// Flip a copy between IN_REPAIR and AVAILABLE
    pub async fn toggle_repair(&self, id: i32) -> AppResult<CopyStatus> {
        let status = self.repository.copies.toggle_repair(id).await?;

        tracing::info!(copy_id = id, status = ?status, "repair toggled");

        Ok(status)
    }
}
