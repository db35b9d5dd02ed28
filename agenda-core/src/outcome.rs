//! Outcome of a lifecycle operation.

use crate::error::AgendaError;
use crate::event::EventId;
use crate::validator::Invalid;

/// Exactly one outcome per lifecycle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Success { id: EventId },
    /// Caller-correctable input problem. Nothing was written.
    ValidationError { message: String },
    /// The event `id` was saved but its reminder needs exact-alarm consent.
    PermissionRequired { id: EventId, message: String },
    NotFound,
    /// A collaborator refused or failed the write.
    StorageFailure { message: String },
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    /// The id of the event the operation left in storage, if any.
    pub fn id(&self) -> Option<EventId> {
        match self {
            OperationResult::Success { id } | OperationResult::PermissionRequired { id, .. } => {
                Some(*id)
            }
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            OperationResult::ValidationError { message }
            | OperationResult::PermissionRequired { message, .. }
            | OperationResult::StorageFailure { message } => Some(message),
            OperationResult::Success { .. } | OperationResult::NotFound => None,
        }
    }

    pub(crate) fn storage_failure(message: impl Into<String>) -> Self {
        OperationResult::StorageFailure {
            message: message.into(),
        }
    }
}

impl From<Invalid> for OperationResult {
    fn from(invalid: Invalid) -> Self {
        OperationResult::ValidationError {
            message: invalid.to_string(),
        }
    }
}

impl From<AgendaError> for OperationResult {
    fn from(e: AgendaError) -> Self {
        OperationResult::storage_failure(e.to_string())
    }
}
