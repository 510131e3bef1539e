//! Client model: PF (natural person) and PJ (legal entity) subtypes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::address::CreateAddress;

/// Client type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "client_type")]
pub enum ClientType {
    PF,
    PJ,
}

/// Client base row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: i32,
    pub client_type: ClientType,
    pub address_id: i32,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
}

/// PF subtype row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClientPf {
    pub client_id: i32,
    pub cpf: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birthdate: NaiveDate,
}

/// PJ subtype row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClientPj {
    pub client_id: i32,
    pub cnpj: String,
    pub legal_name: String,
    pub fantasy_name: Option<String>,
}

/// Client with its subtype row resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientDetails {
    #[serde(flatten)]
    pub client: Client,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pf: Option<ClientPf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pj: Option<ClientPj>,
}

/// Create client request. PF requests carry cpf/name/birthdate fields,
/// PJ requests carry cnpj/legal_name.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClient {
    pub client_type: ClientType,
    pub phone: String,
    pub email: String,
    pub address: CreateAddress,
    // PF fields
    pub cpf: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    // PJ fields
    pub cnpj: Option<String>,
    pub legal_name: Option<String>,
    pub fantasy_name: Option<String>,
}

/// Update client contact data
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClient {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Name parts pulled out of a clients/clients_pf/clients_pj join, used to
/// resolve a display name in reports and review listings.
#[derive(Debug, Clone, FromRow)]
pub struct ClientName {
    pub client_type: ClientType,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub legal_name: Option<String>,
    pub fantasy_name: Option<String>,
}

impl ClientName {
    /// Short display name: "First Last" for PF, fantasy name (or legal
    /// name) for PJ.
    pub fn short(&self) -> String {
        match self.client_type {
            ClientType::PF => match (&self.first_name, &self.last_name) {
                (Some(first), Some(last)) => format!("{} {}", first, last),
                _ => "Unknown client".to_string(),
            },
            ClientType::PJ => self
                .fantasy_name
                .clone()
                .filter(|n| !n.is_empty())
                .or_else(|| self.legal_name.clone())
                .unwrap_or_else(|| "Unknown client".to_string()),
        }
    }

    /// Full display name, with the middle name when present.
    pub fn full(&self) -> String {
        match self.client_type {
            ClientType::PF => match (&self.first_name, &self.last_name) {
                (Some(first), Some(last)) => match &self.middle_name {
                    Some(middle) if !middle.is_empty() => {
                        format!("{} {} {}", first, middle, last)
                    }
                    _ => format!("{} {}", first, last),
                },
                _ => "Unknown client".to_string(),
            },
            ClientType::PJ => self.short(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pf(first: &str, middle: Option<&str>, last: &str) -> ClientName {
        ClientName {
            client_type: ClientType::PF,
            first_name: Some(first.to_string()),
            middle_name: middle.map(str::to_string),
            last_name: Some(last.to_string()),
            legal_name: None,
            fantasy_name: None,
        }
    }

    fn pj(legal: &str, fantasy: Option<&str>) -> ClientName {
        ClientName {
            client_type: ClientType::PJ,
            first_name: None,
            middle_name: None,
            last_name: None,
            legal_name: Some(legal.to_string()),
            fantasy_name: fantasy.map(str::to_string),
        }
    }

    #[test]
    fn pf_short_name_skips_middle() {
        assert_eq!(pf("Ana", Some("Maria"), "Silva").short(), "Ana Silva");
    }

    #[test]
    fn pf_full_name_includes_middle() {
        assert_eq!(pf("Ana", Some("Maria"), "Silva").full(), "Ana Maria Silva");
        assert_eq!(pf("Ana", None, "Silva").full(), "Ana Silva");
    }

    #[test]
    fn pj_prefers_fantasy_name() {
        assert_eq!(pj("Acme LTDA", Some("Acme")).short(), "Acme");
        assert_eq!(pj("Acme LTDA", None).short(), "Acme LTDA");
        assert_eq!(pj("Acme LTDA", Some("")).short(), "Acme LTDA");
    }

    #[test]
    fn missing_subtype_row_falls_back() {
        let name = ClientName {
            client_type: ClientType::PF,
            first_name: None,
            middle_name: None,
            last_name: None,
            legal_name: None,
            fantasy_name: None,
        };
        assert_eq!(name.short(), "Unknown client");
    }
}
