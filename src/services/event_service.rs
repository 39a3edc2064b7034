use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{parse_instant, EventValidator, Summarizer};
use crate::error::{EventError, Result};
use crate::models::{BucketSummary, CreateEvent, Event, Granularity};
use crate::repositories::EventStore;

/// Bridges incoming requests to the event store and the summarizer.
///
/// Every parameter check runs before the store is touched.
#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, payload: CreateEvent) -> Result<Event> {
        let new = EventValidator::validate(payload)?;
        let event = self.store.insert(new).await?;
        info!("Created {} event {} for user {}", event.event_type, event.id, event.user);
        Ok(event)
    }

    /// Returns at most one event. An unknown id yields an empty list.
    pub async fn find_one(&self, id: &str) -> Result<Vec<Event>> {
        let id = Uuid::parse_str(id)
            .map_err(|_| EventError::Validation(format!("invalid event id '{}'", id)))?;

        let found = self.store.find_by_id(id).await?;
        if found.is_none() {
            warn!("No entry found in database with id: {}", id);
        }

        Ok(found.into_iter().collect())
    }

    pub async fn find_range(&self, from: Option<&str>, to: Option<&str>) -> Result<Vec<Event>> {
        let (from, to) = parse_range(from, to)?;

        let events = self.store.find_in_range(from, to).await?;
        if events.is_empty() {
            warn!("No entries found in dates between {} and {}", from, to);
        }

        Ok(events)
    }

    pub async fn summarize(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        by: Option<&str>,
    ) -> Result<Vec<BucketSummary>> {
        let by = present(by, "by")?;
        let (from, to) = parse_range(from, to)?;
        let granularity: Granularity = by.parse()?;

        let events = self.store.find_in_range(from, to).await?;
        if events.is_empty() {
            warn!("No entries found in dates between {} and {}", from, to);
            return Ok(Vec::new());
        }

        let summary = Summarizer::summarize(&events, from, to, granularity);
        info!(
            "Summarized {} event(s) into {} {} bucket(s)",
            events.len(),
            summary.len(),
            granularity
        );

        Ok(summary)
    }
}

fn present<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EventError::Validation(format!(
            "missing required parameter '{}'",
            name
        ))),
    }
}

fn parse_range(from: Option<&str>, to: Option<&str>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let from = present(from, "from")?;
    let to = present(to, "to")?;
    Ok((parse_instant(from)?, parse_instant(to)?))
}
