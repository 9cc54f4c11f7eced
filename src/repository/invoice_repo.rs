use crate::model::intervention::{Intervention, InterventionStatus};
use crate::model::invoice::{Invoice, InvoiceStatus, InvoiceWithIntervention, NewInvoice};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{info, error};

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn create(&self, invoice: NewInvoice) -> RepositoryResult<Invoice>;
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Invoice>;
    async fn update(&self, invoice: Invoice) -> RepositoryResult<Invoice>;
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<InvoiceWithIntervention>>;
}

pub struct PgInvoiceRepository {
    pool: PgPool,
}

impl PgInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        PgInvoiceRepository { pool }
    }

    fn map_row(row: &PgRow) -> RepositoryResult<Invoice> {
        let status_str: String = row.try_get("status")?;
        let status: InvoiceStatus = status_str
            .parse()
            .map_err(|e: String| RepositoryError::database(format!("Stored status invalid: {}", e)))?;
        Ok(Invoice {
            id: row.try_get("id")?,
            amount: row.try_get("amount")?,
            issue_date: row.try_get("issue_date")?,
            due_date: row.try_get("due_date")?,
            status,
            intervention_id: row.try_get("intervention_id")?,
        })
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {

    #[tracing::instrument(skip(self, invoice), fields(intervention_id = %invoice.intervention_id))]
    async fn create(&self, invoice: NewInvoice) -> RepositoryResult<Invoice> {
        info!("Creating new invoice");
        let intervention_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM interventions WHERE id = $1)")
                .bind(invoice.intervention_id)
                .fetch_one(&self.pool)
                .await?;
        if !intervention_exists {
            error!("Intervention {} does not exist", invoice.intervention_id);
            return Err(RepositoryError::reference(format!(
                "Intervention {} does not exist",
                invoice.intervention_id
            )));
        }

        let row = sqlx::query(
            "INSERT INTO invoices (amount, issue_date, due_date, status, intervention_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, amount, issue_date, due_date, status, intervention_id",
        )
        .bind(invoice.amount)
        .bind(invoice.issue_date)
        .bind(invoice.due_date)
        .bind(invoice.status.as_str())
        .bind(invoice.intervention_id)
        .fetch_one(&self.pool)
        .await?;
        let created = Self::map_row(&row)?;
        info!("Invoice created successfully with ID: {}", created.id);
        Ok(created)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Invoice> {
        let row = sqlx::query(
            "SELECT id, amount, issue_date, due_date, status, intervention_id
             FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => Self::map_row(&row),
            None => Err(RepositoryError::not_found(format!(
                "Invoice not found for ID: {}",
                id
            ))),
        }
    }

    #[tracing::instrument(skip(self, invoice), fields(id = %invoice.id))]
    async fn update(&self, invoice: Invoice) -> RepositoryResult<Invoice> {
        info!("Updating invoice with ID: {}", invoice.id);
        let row = sqlx::query(
            "UPDATE invoices
             SET amount = $2, issue_date = $3, due_date = $4, status = $5, intervention_id = $6
             WHERE id = $1
             RETURNING id, amount, issue_date, due_date, status, intervention_id",
        )
        .bind(invoice.id)
        .bind(invoice.amount)
        .bind(invoice.issue_date)
        .bind(invoice.due_date)
        .bind(invoice.status.as_str())
        .bind(invoice.intervention_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => {
                let updated = Self::map_row(&row)?;
                info!("Invoice updated successfully for ID: {}", updated.id);
                Ok(updated)
            }
            None => {
                error!("No invoice found to update for ID: {}", invoice.id);
                Err(RepositoryError::not_found(format!(
                    "No invoice found to update for ID: {}",
                    invoice.id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        info!("Deleting invoice with ID: {}", id);
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            error!("No invoice found to delete for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No invoice found to delete for ID: {}",
                id
            )));
        }
        info!("Invoice deleted successfully for ID: {}", id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<InvoiceWithIntervention>> {
        let rows = sqlx::query(
            "SELECT f.id, f.amount, f.issue_date, f.due_date, f.status, f.intervention_id,
                    i.title AS intervention_title, i.description AS intervention_description,
                    i.date AS intervention_date, i.status AS intervention_status,
                    i.client_id AS intervention_client_id,
                    i.electrician_id AS intervention_electrician_id
             FROM invoices f
             JOIN interventions i ON i.id = f.intervention_id
             ORDER BY f.id",
        )
        .fetch_all(&self.pool)
        .await?;
        let mut invoices = Vec::with_capacity(rows.len());
        for row in &rows {
            let invoice = Self::map_row(row)?;
            let intervention_status: String = row.try_get("intervention_status")?;
            let intervention_status: InterventionStatus = intervention_status
                .parse()
                .map_err(|e: String| RepositoryError::database(format!("Stored status invalid: {}", e)))?;
            let intervention = Intervention {
                id: invoice.intervention_id,
                title: row.try_get("intervention_title")?,
                description: row.try_get("intervention_description")?,
                date: row.try_get("intervention_date")?,
                status: intervention_status,
                client_id: row.try_get("intervention_client_id")?,
                electrician_id: row.try_get("intervention_electrician_id")?,
            };
            invoices.push(InvoiceWithIntervention {
                invoice,
                intervention,
            });
        }
        info!("Fetched {} invoices", invoices.len());
        Ok(invoices)
    }
}
