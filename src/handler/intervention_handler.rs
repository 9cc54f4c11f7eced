use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::intervention_dto::{CreateInterventionRequest, UpdateInterventionRequest};
use crate::dto::{DeleteRequest, MessageResponse};
use crate::service::intervention_service::{InterventionService, InterventionServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn list_interventions_handler(
    State(service): State<Arc<InterventionServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let interventions = service
        .list_interventions()
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(interventions))
}

pub async fn create_intervention_handler(
    State(service): State<Arc<InterventionServiceImpl>>,
    Json(payload): Json<CreateInterventionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let created = service
        .create_intervention(payload)
        .await
        .map_err(HandlerError::from)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_intervention_handler(
    State(service): State<Arc<InterventionServiceImpl>>,
    Json(payload): Json<UpdateInterventionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = service
        .update_intervention(payload)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(updated))
}

pub async fn delete_intervention_handler(
    State(service): State<Arc<InterventionServiceImpl>>,
    Json(payload): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    service
        .delete_intervention(payload.id)
        .await
        .map_err(HandlerError::from)?;
    Ok(Json(MessageResponse {
        message: "Intervention supprimée".to_string(),
    }))
}
