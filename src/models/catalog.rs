//! Catalog reference entities: authors, publishers, branches, languages, collections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::address::{Address, CreateAddress};

/// Author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

/// Update author request (partial)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

/// Publisher model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: i32,
    pub cnpj: String,
    pub name: String,
    pub address_id: i32,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisher {
    pub cnpj: String,
    pub name: String,
    pub address: CreateAddress,
}

/// Rename a publisher
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePublisher {
    pub name: Option<String>,
}

/// Library branch model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Branch {
    pub id: i32,
    pub name: String,
    pub address_id: i32,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBranch {
    pub name: String,
    pub address: CreateAddress,
}

/// Rename a branch
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBranch {
    pub name: Option<String>,
}

/// Branch with its resolved address for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BranchDetails {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub address: Address,
}

/// Language model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Language {
    pub id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLanguage {
    pub code: String,
    pub name: String,
}

/// Collection model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Collection {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollection {
    pub name: String,
}
