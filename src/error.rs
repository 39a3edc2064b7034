use thiserror::Error;

pub type Result<T> = std::result::Result<T, EventError>;

#[derive(Debug, Error)]
pub enum EventError {
    /// A required field or query parameter is missing or empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A date string could not be parsed as an instant
    #[error("Unparseable date: '{0}'")]
    Parse(String),

    #[error("Unsupported granularity '{0}', expected one of: minute, hour, day")]
    InvalidGranularity(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
