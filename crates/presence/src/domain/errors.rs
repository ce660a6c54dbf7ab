//! Domain Errors
//!
//! Error types for domain operations and command interpretation.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Which status-service call failed while interpreting a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Removing the current status failed
    Remove,
    /// Restoring the previous status failed
    Restore,
    /// Fetching the status after a restore failed
    Fetch,
    /// Persisting a newly computed status failed
    Set,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Remove => write!(f, "remove custom status"),
            FailureKind::Restore => write!(f, "restore previous custom status"),
            FailureKind::Fetch => write!(f, "fetch custom status"),
            FailureKind::Set => write!(f, "set custom status"),
        }
    }
}

/// A failed status-service call, tagged with the step that issued it
#[derive(Debug, Error)]
#[error("Failed to {kind}: {source}")]
pub struct CommandFailure {
    pub kind: FailureKind,
    #[source]
    pub source: DomainError,
}

impl CommandFailure {
    pub fn new(kind: FailureKind, source: DomainError) -> Self {
        Self { kind, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_step() {
        let failure = CommandFailure::new(
            FailureKind::Restore,
            DomainError::Storage("disk full".into()),
        );
        assert_eq!(
            failure.to_string(),
            "Failed to restore previous custom status: Storage error: disk full"
        );
    }

    #[test]
    fn test_not_found() {
        let err = DomainError::not_found("Command", "weather");
        assert_eq!(err.to_string(), "Entity not found: Command with id weather");
    }
}
