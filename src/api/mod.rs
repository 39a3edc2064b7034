pub mod events;
pub mod response;
pub mod summary;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::repositories::EventStore;
use crate::services::EventService;

#[derive(Clone)]
pub struct AppState {
    pub service: EventService,
}

pub fn build_router(store: Arc<dyn EventStore>) -> Router {
    let state = AppState {
        service: EventService::new(store),
    };

    Router::new()
        .route("/health", get(events::health_check))
        .route("/event", post(events::create_event))
        .route("/event/{id}", get(events::get_event))
        .route("/events", get(events::list_events))
        .route("/summary", get(summary::get_summary))
        .with_state(state)
}
