//! Error types for monthgrid.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in monthgrid operations.
#[derive(Error, Debug)]
pub enum MonthGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("An event with id '{0}' already exists")]
    DuplicateId(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("'{title}' conflicts with '{existing_title}' ({existing_start}-{existing_end}) on {date}")]
    Conflict {
        title: String,
        existing_id: String,
        existing_title: String,
        existing_start: String,
        existing_end: String,
        date: NaiveDate,
    },

    #[error("Month {month} of year {year} is outside the supported calendar range")]
    DateOutOfRange { year: i64, month: i64 },
}

impl From<serde_json::Error> for MonthGridError {
    fn from(err: serde_json::Error) -> Self {
        MonthGridError::Serialization(err.to_string())
    }
}

/// Result type alias for monthgrid operations.
pub type MonthGridResult<T> = Result<T, MonthGridError>;
