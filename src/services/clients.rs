//! Client management service

use crate::{
    error::{AppError, AppResult},
    models::{
        book::ActiveFilter,
        client::{Client, ClientDetails, ClientPf, ClientPj, ClientType, CreateClient, UpdateClient},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a client: address, base row and subtype row in one
    /// transaction.
    pub async fn create_client(&self, request: CreateClient) -> AppResult<ClientDetails> {
        // Subtype fields are validated before any write
        match request.client_type {
            ClientType::PF => {
                if request.cpf.is_none()
                    || request.first_name.is_none()
                    || request.last_name.is_none()
                    || request.birthdate.is_none()
                {
                    return Err(AppError::Validation(
                        "PF clients require cpf, first_name, last_name and birthdate".to_string(),
                    ));
                }
            }
            ClientType::PJ => {
                if request.cnpj.is_none() || request.legal_name.is_none() {
                    return Err(AppError::Validation(
                        "PJ clients require cnpj and legal_name".to_string(),
                    ));
                }
            }
        }

        let mut tx = self.repository.pool.begin().await?;

        let address_id = self
            .repository
            .addresses
            .insert(&mut tx, &request.address)
            .await?;
        let client = self
            .repository
            .clients
            .insert_client(
                &mut tx,
                request.client_type,
                address_id,
                &request.phone,
                &request.email,
            )
            .await?;

        let (pf, pj) = match request.client_type {
            ClientType::PF => {
                let pf = ClientPf {
                    client_id: client.id,
                    cpf: request.cpf.unwrap_or_default(),
                    first_name: request.first_name.unwrap_or_default(),
                    middle_name: request.middle_name,
                    last_name: request.last_name.unwrap_or_default(),
                    birthdate: request.birthdate.unwrap_or_default(),
                };
                self.repository.clients.insert_pf(&mut tx, &pf).await?;
                (Some(pf), None)
            }
            ClientType::PJ => {
                let pj = ClientPj {
                    client_id: client.id,
                    cnpj: request.cnpj.unwrap_or_default(),
                    legal_name: request.legal_name.unwrap_or_default(),
                    fantasy_name: request.fantasy_name,
                };
                self.repository.clients.insert_pj(&mut tx, &pj).await?;
                (None, Some(pj))
            }
        };

        tx.commit().await?;

        tracing::info!(client_id = client.id, client_type = ?client.client_type, "client created");

        Ok(ClientDetails { client, pf, pj })
    }

    pub async fn get_client(&self, id: i32) -> AppResult<ClientDetails> {
        self.repository.clients.get_details(id).await
    }

    pub async fn list_clients(&self, filter: ActiveFilter) -> AppResult<Vec<Client>> {
        self.repository.clients.list(filter).await
    }

    pub async fn update_client(&self, id: i32, update: UpdateClient) -> AppResult<Client> {
        self.repository.clients.update(id, &update).await
    }

    pub async fn delete_client(&self, id: i32) -> AppResult<()> {
        self.repository.clients.soft_delete(id).await
    }
}
