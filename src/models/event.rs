use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single recorded user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Event {
    #[serde(skip_serializing)]
    pub id: Uuid,

    pub date: DateTime<Utc>,

    #[sqlx(rename = "username")]
    pub user: String,

    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub otheruser: Option<String>,
}

/// Raw `POST /event` body. Every field is optional here so that missing
/// required fields surface as validation errors instead of JSON rejections.
/// Unknown fields are dropped.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEvent {
    pub date: Option<serde_json::Value>,

    pub user: Option<String>,

    #[serde(rename = "type")]
    pub event_type: Option<String>,

    pub message: Option<String>,

    pub otheruser: Option<String>,
}

/// An event that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub date: DateTime<Utc>,
    pub user: String,
    pub event_type: String,
    pub message: Option<String>,
    pub otheruser: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Event {
    pub fn new(new: NewEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: new.date,
            user: new.user,
            event_type: new.event_type,
            message: new.message,
            otheruser: new.otheruser,
        }
    }
}
