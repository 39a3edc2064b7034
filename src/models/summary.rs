use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Categories every bucket reports, even when no event of that kind occurred.
pub const BASELINE_CATEGORIES: [&str; 4] = ["enters", "leaves", "highfives", "comments"];

/// Width of a summary bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Minute,
    Hour,
    Day,
}

impl Granularity {
    /// Truncates `date` down to the start of its bucket, in UTC.
    pub fn truncate(self, date: DateTime<Utc>) -> DateTime<Utc> {
        let (hour, minute) = match self {
            Granularity::Minute => (date.hour(), date.minute()),
            Granularity::Hour => (date.hour(), 0),
            Granularity::Day => (0, 0),
        };

        let start = date.date_naive().and_time(NaiveTime::MIN)
            + TimeDelta::hours(i64::from(hour))
            + TimeDelta::minutes(i64::from(minute));
        start.and_utc()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Granularity::Minute),
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            other => Err(EventError::InvalidGranularity(other.to_string())),
        }
    }
}

/// Formats a bucket start as `YYYY-MM-DDTHH:MM:00Z`.
pub fn bucket_key(start: DateTime<Utc>) -> String {
    start.format("%Y-%m-%dT%H:%M:00Z").to_string()
}

/// Per-category event counts for one bucket.
///
/// Serializes flat: `{"date": "...", "enters": 1, "leaves": 0, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSummary {
    pub date: String,

    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

impl BucketSummary {
    pub fn new(start: DateTime<Utc>) -> Self {
        let counts = BASELINE_CATEGORIES
            .iter()
            .map(|category| (category.to_string(), 0))
            .collect();

        Self {
            date: bucket_key(start),
            counts,
        }
    }

    pub fn count(&self, category: &str) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub by: Option<String>,
}
