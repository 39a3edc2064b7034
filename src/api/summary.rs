use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::info;

use crate::api::response::ApiError;
use crate::models::{BucketSummary, SummaryQuery};

use super::AppState;

pub async fn get_summary(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<Vec<BucketSummary>>, ApiError> {
    let Query(query) = query?;
    info!(
        "Summarizing events between {:?} and {:?} by {:?}",
        query.from, query.to, query.by
    );

    let summary = state
        .service
        .summarize(
            query.from.as_deref(),
            query.to.as_deref(),
            query.by.as_deref(),
        )
        .await?;

    Ok(Json(summary))
}
