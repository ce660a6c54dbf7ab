//! CommandOutcome - Result of interpreting one status command

use crate::domain::entities::CustomStatus;
use crate::domain::errors::{CommandFailure, FailureKind};

/// Outcome of one command invocation. Exactly one per call.
#[derive(Debug)]
pub enum CommandOutcome {
    /// Status removed
    Cleared,
    /// Previous status reinstated
    RestoredWithValue(CustomStatus),
    /// Restore requested but there was nothing to restore
    RestoredEmpty,
    /// New status computed and persisted
    SetWithValue(CustomStatus),
    /// A status-service call failed
    Failed(CommandFailure),
}

impl CommandOutcome {
    /// Status now shown to other users, if the outcome carries one
    pub fn status(&self) -> Option<&CustomStatus> {
        match self {
            Self::RestoredWithValue(status) | Self::SetWithValue(status) => Some(status),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed(failure) => Some(failure.kind),
            _ => None,
        }
    }
}
