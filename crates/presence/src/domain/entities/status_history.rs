//! StatusHistory - Current and recently used statuses for one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CustomStatus;

/// Per-user status record kept by a status store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistory {
    /// Status currently shown, if any
    #[serde(default)]
    pub current: Option<CustomStatus>,
    /// Recently used statuses, most recent first
    #[serde(default)]
    pub recent: Vec<CustomStatus>,
    /// When `current` last changed
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StatusHistory {
    /// Maximum number of recent statuses remembered
    pub const MAX_RECENT: usize = 5;

    /// Make `status` current and move it to the front of the recent list
    pub fn set(&mut self, status: CustomStatus) {
        self.remember(status.clone());
        self.current = Some(status);
        self.updated_at = Some(Utc::now());
    }

    /// Drop the current status; recent statuses are kept
    pub fn clear(&mut self) {
        self.current = None;
        self.updated_at = Some(Utc::now());
    }

    /// Reinstate the most recent status other than the current one.
    ///
    /// With nothing to restore the current status ends up empty.
    pub fn restore_previous(&mut self) -> Option<&CustomStatus> {
        match self.previous().cloned() {
            Some(previous) => self.set(previous),
            None => self.clear(),
        }
        self.current.as_ref()
    }

    /// The status `restore_previous` would reinstate
    pub fn previous(&self) -> Option<&CustomStatus> {
        self.recent
            .iter()
            .find(|status| self.current.as_ref() != Some(*status))
    }

    fn remember(&mut self, status: CustomStatus) {
        self.recent.retain(|existing| existing != &status);
        self.recent.insert(0, status);
        self.recent.truncate(Self::MAX_RECENT);
    }
}
