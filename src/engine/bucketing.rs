use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{BucketSummary, Event, Granularity};

/// Rolls raw events up into per-bucket category counts.
///
/// Pure function of its inputs: no I/O and no shared state, so it is safe to
/// call concurrently.
pub struct Summarizer;

impl Summarizer {
    /// Summarizes the events whose date lies in `[from, to)`.
    ///
    /// Events outside the range are ignored. One record is produced per
    /// bucket holding at least one event, ordered by bucket start.
    pub fn summarize(
        events: &[Event],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        granularity: Granularity,
    ) -> Vec<BucketSummary> {
        let mut buckets: BTreeMap<DateTime<Utc>, BucketSummary> = BTreeMap::new();

        for event in events.iter().filter(|e| e.date >= from && e.date < to) {
            let start = granularity.truncate(event.date);
            let bucket = buckets
                .entry(start)
                .or_insert_with(|| BucketSummary::new(start));

            *bucket
                .counts
                .entry(category_key(&event.event_type))
                .or_insert(0) += 1;
        }

        buckets.into_values().collect()
    }
}

/// Summary key for an event type: the raw type with an `s` appended.
pub fn category_key(event_type: &str) -> String {
    format!("{}s", event_type)
}
