//! Catalog reference-data service: authors, publishers, branches,
//! languages and collections

use crate::{
    error::AppResult,
    models::{
        book::ActiveFilter,
        catalog::{
            Author, Branch, BranchDetails, Collection, CreateAuthor, CreateBranch,
            CreateCollection, CreateLanguage, CreatePublisher, Language, Publisher,
            UpdateAuthor, UpdateBranch, UpdatePublisher,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // --- Authors ---

    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        self.repository.catalog.create_author(&author).await
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.catalog.get_author(id).await
    }

    pub async fn list_authors(&self, filter: ActiveFilter) -> AppResult<Vec<Author>> {
        self.repository.catalog.list_authors(filter).await
    }

    pub async fn update_author(&self, id: i32, update: UpdateAuthor) -> AppResult<Author> {
        self.repository.catalog.update_author(id, &update).await
    }

    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.catalog.soft_delete_author(id).await
    }

    // --- Publishers ---

    /// Create a publisher with its address in one transaction
    pub async fn create_publisher(&self, request: CreatePublisher) -> AppResult<Publisher> {
        let mut tx = self.repository.pool.begin().await?;

        let address_id = self
            .repository
            .addresses
            .insert(&mut tx, &request.address)
            .await?;
        let publisher = self
            .repository
            .catalog
            .insert_publisher(&mut tx, &request.cnpj, &request.name, address_id)
            .await?;

        tx.commit().await?;
        Ok(publisher)
    }

    pub async fn get_publisher(&self, id: i32) -> AppResult<Publisher> {
        self.repository.catalog.get_publisher(id).await
    }

    pub async fn list_publishers(&self, filter: ActiveFilter) -> AppResult<Vec<Publisher>> {
        self.repository.catalog.list_publishers(filter).await
    }

    pub async fn update_publisher(&self, id: i32, update: UpdatePublisher) -> AppResult<Publisher> {
        self.repository.catalog.update_publisher(id, &update).await
    }

    pub async fn delete_publisher(&self, id: i32) -> AppResult<()> {
        self.repository.catalog.soft_delete_publisher(id).await
    }

    // --- Branches ---

    /// Create a branch with its address in one transaction
    pub async fn create_branch(&self, request: CreateBranch) -> AppResult<Branch> {
        let mut tx = self.repository.pool.begin().await?;

        let address_id = self
            .repository
            .addresses
            .insert(&mut tx, &request.address)
            .await?;
        let branch = self
            .repository
            .catalog
            .insert_branch(&mut tx, &request.name, address_id)
            .await?;

        tx.commit().await?;
        Ok(branch)
    }

    pub async fn get_branch(&self, id: i32) -> AppResult<BranchDetails> {
        self.repository.catalog.get_branch(id).await
    }

    pub async fn list_branches(&self, filter: ActiveFilter) -> AppResult<Vec<Branch>> {
        self.repository.catalog.list_branches(filter).await
    }

    pub async fn update_branch(&self, id: i32, update: UpdateBranch) -> AppResult<Branch> {
        self.repository.catalog.update_branch(id, &update).await
    }

    pub async fn delete_branch(&self, id: i32) -> AppResult<()> {
        self.repository.catalog.soft_delete_branch(id).await
    }

    // --- Languages & collections ---

    pub async fn create_language(&self, language: CreateLanguage) -> AppResult<Language> {
        self.repository.catalog.create_language(&language).await
    }

    pub async fn list_languages(&self) -> AppResult<Vec<Language>> {
        self.repository.catalog.list_languages().await
    }

    pub async fn create_collection(&self, collection: CreateCollection) -> AppResult<Collection> {
        self.repository.catalog.create_collection(&collection).await
    }

    pub async fn list_collections(&self) -> AppResult<Vec<Collection>> {
        self.repository.catalog.list_collections().await
    }
}
