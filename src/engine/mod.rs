pub mod bucketing;
pub mod validator;

pub use bucketing::{category_key, Summarizer};
pub use validator::{parse_instant, EventValidator};
