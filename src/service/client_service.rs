use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, error, instrument};

use crate::dto::client_dto::{CreateClientRequest, UpdateClientRequest};
use crate::model::client::{Client, NewClient};
use crate::repository::client_repo::ClientRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ClientService: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError>;
    async fn create_client(&self, request: CreateClientRequest) -> Result<Client, ServiceError>;
    async fn update_client(&self, request: UpdateClientRequest) -> Result<Client, ServiceError>;
    async fn delete_client(&self, id: i32) -> Result<(), ServiceError>;
}

pub struct ClientServiceImpl {
    pub repo: Arc<dyn ClientRepository>,
}

impl ClientServiceImpl {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        ClientServiceImpl { repo }
    }
}

#[async_trait]
impl ClientService for ClientServiceImpl {

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError> {
        let res = self.repo.list().await;
        match &res {
            Ok(clients) => info!("Fetched {} clients", clients.len()),
            Err(e) => error!("Failed to list clients: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_client(&self, request: CreateClientRequest) -> Result<Client, ServiceError> {
        info!("Creating client");
        if request.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Client name is required".to_string(),
            ));
        }
        let client = NewClient {
            name: request.name,
            address: request.address,
            phone: request.phone,
            email: request.email,
        };
        let res = self.repo.create(client).await;
        match &res {
            Ok(created) => info!("Client created with ID: {}", created.id),
            Err(e) => error!("Failed to create client: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %request.id))]
    async fn update_client(&self, request: UpdateClientRequest) -> Result<Client, ServiceError> {
        info!("Updating client");
        let mut client = self.repo.get_by_id(request.id).await?;
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(ServiceError::InvalidInput(
                    "Client name cannot be empty".to_string(),
                ));
            }
            client.name = name;
        }
        if let Some(address) = request.address {
            client.address = Some(address);
        }
        if let Some(phone) = request.phone {
            client.phone = Some(phone);
        }
        if let Some(email) = request.email {
            client.email = Some(email);
        }
        let res = self.repo.update(client).await;
        match &res {
            Ok(_) => info!("Client updated successfully"),
            Err(e) => error!("Failed to update client: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_client(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting client");
        let res = self.repo.delete(id).await;
        match &res {
            Ok(_) => info!("Client deleted successfully"),
            Err(e) => error!("Failed to delete client: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
