//! In-memory StatusService double for application tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{CustomStatus, DomainError, StatusHistory};
use crate::ports::StatusService;

/// Records calls and fails the operations named in `failing`
#[derive(Default)]
pub struct MockStatusService {
    users: Mutex<HashMap<String, StatusHistory>>,
    calls: Mutex<Vec<&'static str>>,
    failing: HashSet<&'static str>,
}

impl MockStatusService {
    /// Fail every call to `operation` ("set", "remove", "restore", "get")
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn seed(&self, user_id: &str, status: CustomStatus) {
        self.users
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .set(status);
    }

    pub fn current(&self, user_id: &str) -> Option<CustomStatus> {
        self.users
            .lock()
            .unwrap()
            .get(user_id)
            .and_then(|history| history.current.clone())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(operation);
        if self.failing.contains(operation) {
            return Err(DomainError::Storage(format!("{} unavailable", operation)));
        }
        Ok(())
    }
}

#[async_trait]
impl StatusService for MockStatusService {
    async fn set_custom_status(
        &self,
        user_id: &str,
        status: &CustomStatus,
    ) -> Result<(), DomainError> {
        self.record("set")?;
        self.seed(user_id, status.clone());
        Ok(())
    }

    async fn remove_custom_status(&self, user_id: &str) -> Result<(), DomainError> {
        self.record("remove")?;
        if let Some(history) = self.users.lock().unwrap().get_mut(user_id) {
            history.clear();
        }
        Ok(())
    }

    async fn set_prev_recent_custom_status(&self, user_id: &str) -> Result<(), DomainError> {
        self.record("restore")?;
        self.users
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .restore_previous();
        Ok(())
    }

    async fn get_custom_status(&self, user_id: &str) -> Result<Option<CustomStatus>, DomainError> {
        self.record("get")?;
        Ok(self.current(user_id))
    }

    async fn get_recent_custom_statuses(
        &self,
        user_id: &str,
    ) -> Result<Vec<CustomStatus>, DomainError> {
        self.record("recent")?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(user_id)
            .map(|history| history.recent.clone())
            .unwrap_or_default())
    }
}
