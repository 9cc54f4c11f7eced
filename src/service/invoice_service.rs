use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, error, instrument};

use crate::dto::invoice_dto::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::model::invoice::{Invoice, InvoiceStatus, InvoiceWithIntervention, NewInvoice};
use crate::repository::invoice_repo::InvoiceRepository;
use crate::util::date;
use crate::util::error::ServiceError;

#[async_trait]
pub trait InvoiceService: Send + Sync {
    async fn list_invoices(&self) -> Result<Vec<InvoiceWithIntervention>, ServiceError>;
    async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice, ServiceError>;
    async fn update_invoice(&self, request: UpdateInvoiceRequest) -> Result<Invoice, ServiceError>;
    async fn delete_invoice(&self, id: i32) -> Result<(), ServiceError>;
}

pub struct InvoiceServiceImpl {
    pub repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceServiceImpl {
    pub fn new(repo: Arc<dyn InvoiceRepository>) -> Self {
        InvoiceServiceImpl { repo }
    }
}

fn parse_status(status: &str) -> Result<InvoiceStatus, ServiceError> {
    status.parse().map_err(ServiceError::InvalidStatus)
}

fn parse_date(value: &str) -> Result<chrono::DateTime<chrono::Utc>, ServiceError> {
    date::parse_flexible(value).map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

#[async_trait]
impl InvoiceService for InvoiceServiceImpl {

    #[instrument(skip(self))]
    async fn list_invoices(&self) -> Result<Vec<InvoiceWithIntervention>, ServiceError> {
        let res = self.repo.list().await;
        match &res {
            Ok(invoices) => info!("Fetched {} invoices", invoices.len()),
            Err(e) => error!("Failed to list invoices: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(intervention_id = %request.intervention_id))]
    async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice, ServiceError> {
        info!("Creating invoice");
        if request.amount < 0.0 || !request.amount.is_finite() {
            return Err(ServiceError::InvalidInput(
                "Invoice amount must be a non-negative number".to_string(),
            ));
        }
        let status = match request.status.as_deref() {
            Some(s) => parse_status(s)?,
            None => InvoiceStatus::default(),
        };
        let invoice = NewInvoice {
            amount: request.amount,
            issue_date: parse_date(&request.issue_date)?,
            due_date: parse_date(&request.due_date)?,
            status,
            intervention_id: request.intervention_id,
        };
        let res = self.repo.create(invoice).await;
        match &res {
            Ok(created) => info!("Invoice created with ID: {}", created.id),
            Err(e) => error!("Failed to create invoice: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %request.id))]
    async fn update_invoice(&self, request: UpdateInvoiceRequest) -> Result<Invoice, ServiceError> {
        info!("Updating invoice");
        let mut invoice = self.repo.get_by_id(request.id).await?;
        if let Some(amount) = request.amount {
            if amount < 0.0 || !amount.is_finite() {
                return Err(ServiceError::InvalidInput(
                    "Invoice amount must be a non-negative number".to_string(),
                ));
            }
            invoice.amount = amount;
        }
        if let Some(issue_date) = request.issue_date {
            invoice.issue_date = parse_date(&issue_date)?;
        }
        if let Some(due_date) = request.due_date {
            invoice.due_date = parse_date(&due_date)?;
        }
        if let Some(status) = request.status {
            invoice.status = parse_status(&status)?;
        }
        if let Some(intervention_id) = request.intervention_id {
            invoice.intervention_id = intervention_id;
        }
        let res = self.repo.update(invoice).await;
        match &res {
            Ok(_) => info!("Invoice updated successfully"),
            Err(e) => error!("Failed to update invoice: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_invoice(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting invoice");
        let res = self.repo.delete(id).await;
        match &res {
            Ok(_) => info!("Invoice deleted successfully"),
            Err(e) => error!("Failed to delete invoice: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
