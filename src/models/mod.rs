pub mod event;
pub mod summary;

pub use event::{CreateEvent, Event, NewEvent, RangeQuery};
pub use summary::{BucketSummary, Granularity, SummaryQuery, BASELINE_CATEGORIES};
