use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, error, instrument};

use crate::dto::electrician_dto::{CreateElectricianRequest, UpdateElectricianRequest};
use crate::model::electrician::{Electrician, NewElectrician};
use crate::repository::electrician_repo::ElectricianRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ElectricianService: Send + Sync {
    async fn list_electricians(&self) -> Result<Vec<Electrician>, ServiceError>;
    async fn create_electrician(
        &self,
        request: CreateElectricianRequest,
    ) -> Result<Electrician, ServiceError>;
    async fn update_electrician(
        &self,
        request: UpdateElectricianRequest,
    ) -> Result<Electrician, ServiceError>;
    async fn delete_electrician(&self, id: i32) -> Result<(), ServiceError>;
}

pub struct ElectricianServiceImpl {
    pub repo: Arc<dyn ElectricianRepository>,
}

impl ElectricianServiceImpl {
    pub fn new(repo: Arc<dyn ElectricianRepository>) -> Self {
        ElectricianServiceImpl { repo }
    }
}

#[async_trait]
impl ElectricianService for ElectricianServiceImpl {

    #[instrument(skip(self))]
    async fn list_electricians(&self) -> Result<Vec<Electrician>, ServiceError> {
        let res = self.repo.list().await;
        match &res {
            Ok(electricians) => info!("Fetched {} electricians", electricians.len()),
            Err(e) => error!("Failed to list electricians: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_electrician(
        &self,
        request: CreateElectricianRequest,
    ) -> Result<Electrician, ServiceError> {
        info!("Creating electrician");
        if request.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Electrician name is required".to_string(),
            ));
        }
        let res = self.repo.create(NewElectrician { name: request.name }).await;
        match &res {
            Ok(created) => info!("Electrician created with ID: {}", created.id),
            Err(e) => error!("Failed to create electrician: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %request.id))]
    async fn update_electrician(
        &self,
        request: UpdateElectricianRequest,
    ) -> Result<Electrician, ServiceError> {
        info!("Updating electrician");
        let mut electrician = self.repo.get_by_id(request.id).await?;
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(ServiceError::InvalidInput(
                    "Electrician name cannot be empty".to_string(),
                ));
            }
            electrician.name = name;
        }
        let res = self.repo.update(electrician).await;
        match &res {
            Ok(_) => info!("Electrician updated successfully"),
            Err(e) => error!("Failed to update electrician: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_electrician(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting electrician");
        let res = self.repo.delete(id).await;
        match &res {
            Ok(_) => info!("Electrician deleted successfully"),
            Err(e) => error!("Failed to delete electrician: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
