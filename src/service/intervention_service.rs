use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, error, instrument};

use crate::dto::intervention_dto::{CreateInterventionRequest, UpdateInterventionRequest};
use crate::model::intervention::{
    Intervention, InterventionStatus, InterventionWithRelations, NewIntervention,
};
use crate::repository::intervention_repo::InterventionRepository;
use crate::util::date;
use crate::util::error::ServiceError;

#[async_trait]
pub trait InterventionService: Send + Sync {
    async fn list_interventions(&self) -> Result<Vec<InterventionWithRelations>, ServiceError>;
    async fn create_intervention(
        &self,
        request: CreateInterventionRequest,
    ) -> Result<Intervention, ServiceError>;
    async fn update_intervention(
        &self,
        request: UpdateInterventionRequest,
    ) -> Result<Intervention, ServiceError>;
    async fn delete_intervention(&self, id: i32) -> Result<(), ServiceError>;
}

pub struct InterventionServiceImpl {
    pub repo: Arc<dyn InterventionRepository>,
}

impl InterventionServiceImpl {
    pub fn new(repo: Arc<dyn InterventionRepository>) -> Self {
        InterventionServiceImpl { repo }
    }
}

fn parse_status(status: &str) -> Result<InterventionStatus, ServiceError> {
    status.parse().map_err(ServiceError::InvalidStatus)
}

fn parse_date(value: &str) -> Result<chrono::DateTime<chrono::Utc>, ServiceError> {
    date::parse_flexible(value).map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

#[async_trait]
impl InterventionService for InterventionServiceImpl {

    #[instrument(skip(self))]
    async fn list_interventions(&self) -> Result<Vec<InterventionWithRelations>, ServiceError> {
        let res = self.repo.list().await;
        match &res {
            Ok(interventions) => info!("Fetched {} interventions", interventions.len()),
            Err(e) => error!("Failed to list interventions: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_intervention(
        &self,
        request: CreateInterventionRequest,
    ) -> Result<Intervention, ServiceError> {
        info!("Creating intervention");
        if request.title.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Intervention title is required".to_string(),
            ));
        }
        let status = match request.status.as_deref() {
            Some(s) => parse_status(s)?,
            None => InterventionStatus::default(),
        };
        let intervention = NewIntervention {
            title: request.title,
            description: request.description,
            date: parse_date(&request.date)?,
            status,
            client_id: request.client_id,
            electrician_id: request.electrician_id,
        };
        let res = self.repo.create(intervention).await;
        match &res {
            Ok(created) => info!("Intervention created with ID: {}", created.id),
            Err(e) => error!("Failed to create intervention: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %request.id))]
    async fn update_intervention(
        &self,
        request: UpdateInterventionRequest,
    ) -> Result<Intervention, ServiceError> {
        info!("Updating intervention");
        let mut intervention = self.repo.get_by_id(request.id).await?;
        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(ServiceError::InvalidInput(
                    "Intervention title cannot be empty".to_string(),
                ));
            }
            intervention.title = title;
        }
        if let Some(description) = request.description {
            intervention.description = Some(description);
        }
        if let Some(date) = request.date {
            intervention.date = parse_date(&date)?;
        }
        if let Some(status) = request.status {
            intervention.status = parse_status(&status)?;
        }
        if let Some(client_id) = request.client_id {
            intervention.client_id = client_id;
        }
        if let Some(electrician_id) = request.electrician_id {
            intervention.electrician_id = electrician_id;
        }
        let res = self.repo.update(intervention).await;
        match &res {
            Ok(_) => info!("Intervention updated successfully"),
            Err(e) => error!("Failed to update intervention: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_intervention(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting intervention");
        let res = self.repo.delete(id).await;
        match &res {
            Ok(_) => info!("Intervention deleted successfully"),
            Err(e) => error!("Failed to delete intervention: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
