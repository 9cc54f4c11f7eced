use crate::model::client::{Client, NewClient};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, error};

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: NewClient) -> RepositoryResult<Client>;
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Client>;
    async fn update(&self, client: Client) -> RepositoryResult<Client>;
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Client>>;
}

pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        PgClientRepository { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {

    #[tracing::instrument(skip(self, client), fields(name = %client.name))]
    async fn create(&self, client: NewClient) -> RepositoryResult<Client> {
        info!("Creating new client");
        let result = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, address, phone, email)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, address, phone, email, created_at, updated_at",
        )
        .bind(&client.name)
        .bind(&client.address)
        .bind(&client.phone)
        .bind(&client.email)
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(created) => {
                info!("Client created successfully with ID: {}", created.id);
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create client: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Client> {
        let result = sqlx::query_as::<_, Client>(
            "SELECT id, name, address, phone, email, created_at, updated_at
             FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        result.ok_or_else(|| RepositoryError::not_found(format!("Client not found for ID: {}", id)))
    }

    #[tracing::instrument(skip(self, client), fields(id = %client.id))]
    async fn update(&self, client: Client) -> RepositoryResult<Client> {
        info!("Updating client with ID: {}", client.id);
        let result = sqlx::query_as::<_, Client>(
            "UPDATE clients
             SET name = $2, address = $3, phone = $4, email = $5, updated_at = now()
             WHERE id = $1
             RETURNING id, name, address, phone, email, created_at, updated_at",
        )
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.address)
        .bind(&client.phone)
        .bind(&client.email)
        .fetch_optional(&self.pool)
        .await?;
        match result {
            Some(updated) => {
                info!("Client updated successfully for ID: {}", updated.id);
                Ok(updated)
            }
            None => {
                error!("No client found to update for ID: {}", client.id);
                Err(RepositoryError::not_found(format!(
                    "No client found to update for ID: {}",
                    client.id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        info!("Deleting client with ID: {}", id);
        let dependents: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interventions WHERE client_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        if dependents > 0 {
            error!("Client {} is still referenced by {} intervention(s)", id, dependents);
            return Err(RepositoryError::reference(format!(
                "Client {} is still referenced by {} intervention(s)",
                id, dependents
            )));
        }
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            error!("No client found to delete for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No client found to delete for ID: {}",
                id
            )));
        }
        info!("Client deleted successfully for ID: {}", id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, address, phone, email, created_at, updated_at
             FROM clients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        info!("Fetched {} clients", clients.len());
        Ok(clients)
    }
}
