use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::invoice_dto::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::dto::{DeleteRequest, MessageResponse};
use crate::service::invoice_service::{InvoiceService, InvoiceServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn list_invoices_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let invoices = service.list_invoices().await.map_err(HandlerError::from)?;
    Ok(Json(invoices))
}

pub async fn create_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let created = service.create_invoice(payload).await.map_err(HandlerError::from)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = service.update_invoice(payload).await.map_err(HandlerError::from)?;
    Ok(Json(updated))
}

pub async fn delete_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Json(payload): Json<DeleteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_invoice(payload.id).await.map_err(HandlerError::from)?;
    Ok(Json(MessageResponse {
        message: "Facture supprimée".to_string(),
    }))
}
