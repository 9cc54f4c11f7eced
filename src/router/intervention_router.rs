use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handler::intervention_handler::{
    create_intervention_handler,
    delete_intervention_handler,
    list_interventions_handler,
    update_intervention_handler,
};
use crate::service::intervention_service::InterventionServiceImpl;

pub fn intervention_router(service: Arc<InterventionServiceImpl>) -> Router {
    Router::new()
        .route(
            "/interventions",
            get(list_interventions_handler)
                .post(create_intervention_handler)
                .put(update_intervention_handler)
                .delete(delete_intervention_handler),
        )
        .with_state(service)
}
