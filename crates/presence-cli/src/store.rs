//! JSON file implementation of StatusService
//!
//! Keeps every user's `StatusHistory` in one JSON document that is
//! rewritten after each change.

use async_trait::async_trait;
use presence::{CustomStatus, DomainError, StatusHistory, StatusService};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StatusBook {
    #[serde(default)]
    users: BTreeMap<String, StatusHistory>,
}

/// File-backed status store
pub struct FileStatusStore {
    path: Option<PathBuf>,
    book: Mutex<StatusBook>,
}

impl FileStatusStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let book = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                DomainError::Storage(format!("Invalid status file {:?}: {}", path, e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StatusBook::default(),
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "Failed to read {:?}: {}",
                    path, e
                )))
            }
        };

        tracing::debug!(path = ?path, users = book.users.len(), "Opened status store");
        Ok(Self {
            path: Some(path),
            book: Mutex::new(book),
        })
    }

    /// Store that never touches disk
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            book: Mutex::new(StatusBook::default()),
        }
    }

    /// Full history of a user
    pub async fn history(&self, user_id: &str) -> StatusHistory {
        self.book
            .lock()
            .await
            .users
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Apply `change` to the user's history and persist the result.
    ///
    /// The in-memory book is only replaced once the write succeeded.
    async fn update<F>(&self, user_id: &str, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut StatusHistory) + Send,
    {
        let mut book = self.book.lock().await;
        let mut next = book.clone();
        change(next.users.entry(user_id.to_string()).or_default());

        if let Some(path) = &self.path {
            persist(path, &next).await?;
        }
        *book = next;
        Ok(())
    }
}

async fn persist(path: &Path, book: &StatusBook) -> Result<(), DomainError> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let content = serde_json::to_string_pretty(book)
        .map_err(|e| DomainError::Storage(format!("Failed to serialize statuses: {}", e)))?;
    tokio::fs::write(path, content)
        .await
        .map_err(|e| DomainError::Storage(format!("Failed to write {:?}: {}", path, e)))
}

#[async_trait]
impl StatusService for FileStatusStore {
    async fn set_custom_status(
        &self,
        user_id: &str,
        status: &CustomStatus,
    ) -> Result<(), DomainError> {
        if status.emoji.is_empty() {
            return Err(DomainError::Validation("Status emoji must not be empty".into()));
        }
        let status = status.clone();
        self.update(user_id, move |history| history.set(status)).await
    }

    async fn remove_custom_status(&self, user_id: &str) -> Result<(), DomainError> {
        self.update(user_id, StatusHistory::clear).await
    }

    async fn set_prev_recent_custom_status(&self, user_id: &str) -> Result<(), DomainError> {
        self.update(user_id, |history| {
            history.restore_previous();
        })
        .await
    }

    async fn get_custom_status(&self, user_id: &str) -> Result<Option<CustomStatus>, DomainError> {
        Ok(self.history(user_id).await.current)
    }

    async fn get_recent_custom_statuses(
        &self,
        user_id: &str,
    ) -> Result<Vec<CustomStatus>, DomainError> {
        Ok(self.history(user_id).await.recent)
    }
}
