use thiserror::Error;

use crate::validate::Verdict;

#[derive(Error, Debug)]
pub enum StockroomError {
    /// The candidate failed one or more field rules. Carries the full
    /// per-field verdict so callers can surface inline feedback.
    #[error("candidate failed validation")]
    Validation(Verdict),

    #[error("another edit is already in progress")]
    ConcurrentEdit,

    #[error("another removal is already in progress")]
    ConcurrentRemoval,

    #[error("no item at position {0}")]
    UnknownPosition(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
