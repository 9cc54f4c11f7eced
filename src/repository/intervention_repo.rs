use crate::model::client::Client;
use crate::model::electrician::Electrician;
use crate::model::intervention::{
    Intervention, InterventionStatus, InterventionWithRelations, NewIntervention,
};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{info, error};

#[async_trait]
pub trait InterventionRepository: Send + Sync {
    async fn create(&self, intervention: NewIntervention) -> RepositoryResult<Intervention>;
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Intervention>;
    async fn update(&self, intervention: Intervention) -> RepositoryResult<Intervention>;
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<InterventionWithRelations>>;
}

pub struct PgInterventionRepository {
    pool: PgPool,
}

impl PgInterventionRepository {
    pub fn new(pool: PgPool) -> Self {
        PgInterventionRepository { pool }
    }

    fn map_row(row: &PgRow) -> RepositoryResult<Intervention> {
        let status_str: String = row.try_get("status")?;
        let status: InterventionStatus = status_str
            .parse()
            .map_err(|e: String| RepositoryError::database(format!("Stored status invalid: {}", e)))?;
        Ok(Intervention {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            date: row.try_get("date")?,
            status,
            client_id: row.try_get("client_id")?,
            electrician_id: row.try_get("electrician_id")?,
        })
    }
}

#[async_trait]
impl InterventionRepository for PgInterventionRepository {

    #[tracing::instrument(skip(self, intervention), fields(title = %intervention.title))]
    async fn create(&self, intervention: NewIntervention) -> RepositoryResult<Intervention> {
        info!("Creating new intervention");
        let client_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(intervention.client_id)
                .fetch_one(&self.pool)
                .await?;
        if !client_exists {
            error!("Client {} does not exist", intervention.client_id);
            return Err(RepositoryError::reference(format!(
                "Client {} does not exist",
                intervention.client_id
            )));
        }
        let electrician_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM electricians WHERE id = $1)")
                .bind(intervention.electrician_id)
                .fetch_one(&self.pool)
                .await?;
        if !electrician_exists {
            error!("Electrician {} does not exist", intervention.electrician_id);
            return Err(RepositoryError::reference(format!(
                "Electrician {} does not exist",
                intervention.electrician_id
            )));
        }

        let row = sqlx::query(
            "INSERT INTO interventions (title, description, date, status, client_id, electrician_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, description, date, status, client_id, electrician_id",
        )
        .bind(&intervention.title)
        .bind(&intervention.description)
        .bind(intervention.date)
        .bind(intervention.status.as_str())
        .bind(intervention.client_id)
        .bind(intervention.electrician_id)
        .fetch_one(&self.pool)
        .await?;
        let created = Self::map_row(&row)?;
        info!("Intervention created successfully with ID: {}", created.id);
        Ok(created)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Intervention> {
        let row = sqlx::query(
            "SELECT id, title, description, date, status, client_id, electrician_id
             FROM interventions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => Self::map_row(&row),
            None => Err(RepositoryError::not_found(format!(
                "Intervention not found for ID: {}",
                id
            ))),
        }
    }

    #[tracing::instrument(skip(self, intervention), fields(id = %intervention.id))]
    async fn update(&self, intervention: Intervention) -> RepositoryResult<Intervention> {
        info!("Updating intervention with ID: {}", intervention.id);
        let row = sqlx::query(
            "UPDATE interventions
             SET title = $2, description = $3, date = $4, status = $5,
                 client_id = $6, electrician_id = $7
             WHERE id = $1
             RETURNING id, title, description, date, status, client_id, electrician_id",
        )
        .bind(intervention.id)
        .bind(&intervention.title)
        .bind(&intervention.description)
        .bind(intervention.date)
        .bind(intervention.status.as_str())
        .bind(intervention.client_id)
        .bind(intervention.electrician_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => {
                let updated = Self::map_row(&row)?;
                info!("Intervention updated successfully for ID: {}", updated.id);
                Ok(updated)
            }
            None => {
                error!("No intervention found to update for ID: {}", intervention.id);
                Err(RepositoryError::not_found(format!(
                    "No intervention found to update for ID: {}",
                    intervention.id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        info!("Deleting intervention with ID: {}", id);
        let dependents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM invoices WHERE intervention_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        if dependents > 0 {
            error!("Intervention {} is still referenced by {} invoice(s)", id, dependents);
            return Err(RepositoryError::reference(format!(
                "Intervention {} is still referenced by {} invoice(s)",
                id, dependents
            )));
        }
        let result = sqlx::query("DELETE FROM interventions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            error!("No intervention found to delete for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No intervention found to delete for ID: {}",
                id
            )));
        }
        info!("Intervention deleted successfully for ID: {}", id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<InterventionWithRelations>> {
        let rows = sqlx::query(
            "SELECT i.id, i.title, i.description, i.date, i.status,
                    i.client_id, i.electrician_id,
                    c.name AS client_name, c.address AS client_address,
                    c.phone AS client_phone, c.email AS client_email,
                    c.created_at AS client_created_at, c.updated_at AS client_updated_at,
                    e.name AS electrician_name,
                    e.created_at AS electrician_created_at, e.updated_at AS electrician_updated_at
             FROM interventions i
             JOIN clients c ON c.id = i.client_id
             JOIN electricians e ON e.id = i.electrician_id
             ORDER BY i.id",
        )
        .fetch_all(&self.pool)
        .await?;
        let mut interventions = Vec::with_capacity(rows.len());
        for row in &rows {
            let intervention = Self::map_row(row)?;
            let client = Client {
                id: intervention.client_id,
                name: row.try_get("client_name")?,
                address: row.try_get("client_address")?,
                phone: row.try_get("client_phone")?,
                email: row.try_get("client_email")?,
                created_at: row.try_get("client_created_at")?,
                updated_at: row.try_get("client_updated_at")?,
            };
            let electrician = Electrician {
                id: intervention.electrician_id,
                name: row.try_get("electrician_name")?,
                created_at: row.try_get("electrician_created_at")?,
                updated_at: row.try_get("electrician_updated_at")?,
            };
            interventions.push(InterventionWithRelations {
                intervention,
                client,
                electrician,
            });
        }
        info!("Fetched {} interventions", interventions.len());
        Ok(interventions)
    }
}
