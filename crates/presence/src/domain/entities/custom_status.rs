//! CustomStatus - Emoji and message shown next to a user's presence
//!
//! Pure domain value without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DEFAULT_EMOJI;

/// A user-chosen emoji + short text pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomStatus {
    /// Emoji short name, without surrounding colons
    pub emoji: String,
    /// Display message
    pub text: String,
}

impl CustomStatus {
    /// Longest status text kept, in characters
    pub const MAX_TEXT_CHARS: usize = 100;

    /// Create a new status
    pub fn new(emoji: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            text: text.into(),
        }
    }

    /// Create a status with the default emoji
    pub fn with_default_emoji(text: impl Into<String>) -> Self {
        Self::new(DEFAULT_EMOJI, text)
    }

    /// Truncate `text` to [`Self::MAX_TEXT_CHARS`] characters
    pub fn truncate_text(text: &str) -> String {
        match text.char_indices().nth(Self::MAX_TEXT_CHARS) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text.to_string(),
        }
    }

    /// Emoji wrapped in colons, as typed in chat (`:tada:`)
    pub fn display_emoji(&self) -> String {
        format!(":{}:", self.emoji)
    }
}

impl std::fmt::Display for CustomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.display_emoji())
        } else {
            write!(f, "{} {}", self.display_emoji(), self.text)
        }
    }
}
