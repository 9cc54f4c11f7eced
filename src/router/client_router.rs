use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handler::client_handler::{
    create_client_handler,
    delete_client_handler,
    list_clients_handler,
    update_client_handler,
};
use crate::service::client_service::ClientServiceImpl;

pub fn client_router(service: Arc<ClientServiceImpl>) -> Router {
    Router::new()
        .route(
            "/clients",
            get(list_clients_handler)
                .post(create_client_handler)
                .put(update_client_handler)
                .delete(delete_client_handler),
        )
        .with_state(service)
}
