use thiserror::Error;

use crate::core::ConflictInfo;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid date `{input}`: expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    #[error("{0}")]
    Overlap(ConflictInfo),

    #[error("{kind} `{id}` not found")]
    NotFound { kind: &'static str, id: String },

    #[error("storage error: {0}")]
    Storage(String),
}
