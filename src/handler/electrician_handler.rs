use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::electrician_dto::{CreateElectricianRequest, UpdateElectricianRequest};
use crate::dto::{DeleteRequest, MessageResponse};
use crate::service::electrician_service::{ElectricianService, ElectricianServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn list_electricians_handler(
    State(service): State<Arc<ElectricianServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let electricians = service.list_electricians().await.map_err(HandlerError::from)?;
    Ok(Json(electricians))
}

pub async fn create_electrician_handler(
    State(service): State<Arc<ElectricianServiceImpl>>,
    Json(payload): Json<CreateElectricianRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let created = service
        .create_electrician(payload)
        .await
        .map_err(HandlerError::from)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_electrician_handler(
    State(service): State<Arc<ElectricianServiceImpl>>,
    Json(payload): Json<UpdateElectricianRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = service
        .update_electrician(payload)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(updated))
}

pub async fn delete_electrician_handler(
    State(service): State<Arc<ElectricianServiceImpl>>,
    Json(payload): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    service
        .delete_electrician(payload.id)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(MessageResponse {
        message: "Électricien supprimé".to_string(),
    }))
}
