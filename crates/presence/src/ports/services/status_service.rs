//! Status Service Port
//!
//! Abstract interface for custom status persistence.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, CustomStatus};

/// Service interface for reading and writing a user's custom status
///
/// User IDs are opaque keys and are passed through unchanged.
/// Concurrent calls for the same user are the implementation's concern.
#[async_trait]
pub trait StatusService: Send + Sync {
    /// Persist `status` as the user's current status
    async fn set_custom_status(&self, user_id: &str, status: &CustomStatus)
        -> Result<(), DomainError>;

    /// Remove the user's current status
    async fn remove_custom_status(&self, user_id: &str) -> Result<(), DomainError>;

    /// Reinstate the most recently used status before the current one.
    ///
    /// Having nothing to restore is not an error; the user simply ends up
    /// with no status. That includes a user whose only recent status is the
    /// current one, so restoring can erase an active status.
    async fn set_prev_recent_custom_status(&self, user_id: &str) -> Result<(), DomainError>;

    /// Get the user's current status
    async fn get_custom_status(&self, user_id: &str) -> Result<Option<CustomStatus>, DomainError>;

    /// Get recently used statuses, most recent first
    async fn get_recent_custom_statuses(
        &self,
        _user_id: &str,
    ) -> Result<Vec<CustomStatus>, DomainError> {
        Ok(Vec::new())
    }

    /// Bound the length of a status message before it is persisted
    fn trim_message(&self, text: &str) -> String {
        CustomStatus::truncate_text(text)
    }
}
