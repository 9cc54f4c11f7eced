use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handler::invoice_handler::{
    create_invoice_handler,
    delete_invoice_handler,
    list_invoices_handler,
    update_invoice_handler,
};
use crate::service::invoice_service::InvoiceServiceImpl;

pub fn invoice_router(service: Arc<InvoiceServiceImpl>) -> Router {
    Router::new()
        .route(
            "/invoices",
            get(list_invoices_handler)
                .post(create_invoice_handler)
                .put(update_invoice_handler)
                .delete(delete_invoice_handler),
        )
        .with_state(service)
}
