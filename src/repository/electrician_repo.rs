use crate::model::electrician::{Electrician, NewElectrician};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, error};

#[async_trait]
pub trait ElectricianRepository: Send + Sync {
    async fn create(&self, electrician: NewElectrician) -> RepositoryResult<Electrician>;
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Electrician>;
    async fn update(&self, electrician: Electrician) -> RepositoryResult<Electrician>;
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Electrician>>;
}

pub struct PgElectricianRepository {
    pool: PgPool,
}

impl PgElectricianRepository {
    pub fn new(pool: PgPool) -> Self {
        PgElectricianRepository { pool }
    }
}

#[async_trait]
impl ElectricianRepository for PgElectricianRepository {

    #[tracing::instrument(skip(self, electrician), fields(name = %electrician.name))]
    async fn create(&self, electrician: NewElectrician) -> RepositoryResult<Electrician> {
        info!("Creating new electrician");
        let result = sqlx::query_as::<_, Electrician>(
            "INSERT INTO electricians (name)
             VALUES ($1)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&electrician.name)
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(created) => {
                info!("Electrician created successfully with ID: {}", created.id);
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create electrician: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Electrician> {
        let result = sqlx::query_as::<_, Electrician>(
            "SELECT id, name, created_at, updated_at FROM electricians WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        result.ok_or_else(|| {
            RepositoryError::not_found(format!("Electrician not found for ID: {}", id))
        })
    }

    #[tracing::instrument(skip(self, electrician), fields(id = %electrician.id))]
    async fn update(&self, electrician: Electrician) -> RepositoryResult<Electrician> {
        info!("Updating electrician with ID: {}", electrician.id);
        let result = sqlx::query_as::<_, Electrician>(
            "UPDATE electricians
             SET name = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, name, created_at, updated_at",
        )
        .bind(electrician.id)
        .bind(&electrician.name)
        .fetch_optional(&self.pool)
        .await?;
        match result {
            Some(updated) => {
                info!("Electrician updated successfully for ID: {}", updated.id);
                Ok(updated)
            }
            None => {
                error!("No electrician found to update for ID: {}", electrician.id);
                Err(RepositoryError::not_found(format!(
                    "No electrician found to update for ID: {}",
                    electrician.id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        info!("Deleting electrician with ID: {}", id);
        let dependents: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interventions WHERE electrician_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        if dependents > 0 {
            error!(
                "Electrician {} is still referenced by {} intervention(s)",
                id, dependents
            );
            return Err(RepositoryError::reference(format!(
                "Electrician {} is still referenced by {} intervention(s)",
                id, dependents
            )));
        }
        let result = sqlx::query("DELETE FROM electricians WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            error!("No electrician found to delete for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No electrician found to delete for ID: {}",
                id
            )));
        }
        info!("Electrician deleted successfully for ID: {}", id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Electrician>> {
        let electricians = sqlx::query_as::<_, Electrician>(
            "SELECT id, name, created_at, updated_at FROM electricians ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        info!("Fetched {} electricians", electricians.len());
        Ok(electricians)
    }
}
