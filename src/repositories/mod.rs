pub mod event_repository;
pub mod memory;

pub use event_repository::PgEventStore;
pub use memory::InMemoryEventStore;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Event, NewEvent};

/// Durable collection of events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Stores a validated event and returns the stored record.
    async fn insert(&self, event: NewEvent) -> Result<Event>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// Events with `from <= date < to`.
    async fn find_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Event>>;
}
