//! Error types for interview-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid time label '{0}': expected zero-padded HH:MM")]
    InvalidTimeLabel(String),

    #[error("Not a grid slot: {0} (expected 09:00-17:30 on the hour or half hour)")]
    OffGrid(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Invalid duration {0}: expected 15, 30 or 60 minutes")]
    InvalidDuration(u32),

    #[error("Invalid window for '{owner}' on {day}: start {start} must be before end {end}")]
    InvalidWindow {
        owner: String,
        day: String,
        start: String,
        end: String,
    },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),

    #[error("Fixture parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
