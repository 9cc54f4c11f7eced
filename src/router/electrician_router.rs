use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handler::electrician_handler::{
    create_electrician_handler,
    delete_electrician_handler,
    list_electricians_handler,
    update_electrician_handler,
};
use crate::service::electrician_service::ElectricianServiceImpl;

pub fn electrician_router(service: Arc<ElectricianServiceImpl>) -> Router {
    Router::new()
        .route(
            "/electricians",
            get(list_electricians_handler)
                .post(create_electrician_handler)
                .put(update_electrician_handler)
                .delete(delete_electrician_handler),
        )
        .with_state(service)
}
