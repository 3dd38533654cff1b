//! Error types for slot-grid operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid opening hours: opens at {opens}, closes at {closes}")]
    InvalidOpeningHours { opens: u32, closes: u32 },

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    /// The wall-clock time falls in a DST gap of the time zone.
    #[error("Local time does not exist: {0}")]
    NonexistentLocalTime(NaiveDateTime),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
