use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::client_dto::{CreateClientRequest, UpdateClientRequest};
use crate::dto::{DeleteRequest, MessageResponse};
use crate::service::client_service::{ClientService, ClientServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn list_clients_handler(
    State(service): State<Arc<ClientServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let clients = service.list_clients().await.map_err(HandlerError::from)?;
    Ok(Json(clients))
}

pub async fn create_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let created = service.create_client(payload).await.map_err(HandlerError::from)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = service.update_client(payload).await.map_err(HandlerError::from)?;
    Ok(Json(updated))
}

pub async fn delete_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Json(payload): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_client(payload.id).await.map_err(HandlerError::from)?;
    Ok(Json(MessageResponse {
        message: "Client supprimé".to_string(),
    }))
}
