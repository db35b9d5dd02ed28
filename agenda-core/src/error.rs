//! Error types for the agenda core.

use thiserror::Error;

/// Faults raised by collaborators (storage, alarms, clock, configuration).
///
/// These never cross the lifecycle boundary: `EventLifecycle` converts them
/// into an [`OperationResult`](crate::OperationResult).
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Alarm error: {0}")]
    Alarm(String),

    #[error("Invalid date/time: {0}")]
    DateTime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AgendaError {
    fn from(e: serde_json::Error) -> Self {
        AgendaError::Serialization(e.to_string())
    }
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
