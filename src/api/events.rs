use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::api::response::{ApiError, ApiResult};
use crate::models::{CreateEvent, Event, RangeQuery};

use super::AppState;

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEvent>, JsonRejection>,
) -> ApiResult {
    let Json(payload) = payload?;
    info!("Creating event: {:?}", payload);

    let event = state.service.record(payload).await?;

    Ok(Json(json!({
        "status": "ok",
        "id": event.id
    })))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Event>>, ApiError> {
    info!("Getting event by id: {}", id);

    let events = state.service.find_one(&id).await?;
    Ok(Json(events))
}

pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Query(query) = query?;
    info!("Listing events between {:?} and {:?}", query.from, query.to);

    let events = state
        .service
        .find_range(query.from.as_deref(), query.to.as_deref())
        .await?;

    Ok(Json(events))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
