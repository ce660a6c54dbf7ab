//! Slash Command Port
//!
//! Abstract interface for slash command providers, plus the metadata
//! a chat client needs to list and autocomplete them.
//!
//! Providers are registered once at startup (see `CommandRegistry`)
//! and looked up by trigger.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Slash command provider interface
///
/// # Example
///
/// ```rust,ignore
/// use presence::ports::CommandProvider;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl CommandProvider for EchoProvider {
///     fn trigger(&self) -> &str { "echo" }
///     fn command(&self) -> Command { Command::new("echo", "echo", "Repeat text") }
///     async fn execute(&self, _ctx: &CommandContext, message: &str) -> Option<CommandResponse> {
///         Some(CommandResponse::ephemeral(message))
///     }
/// }
/// ```
#[async_trait]
pub trait CommandProvider: Send + Sync {
    /// Trigger word, without the leading `/`
    fn trigger(&self) -> &str;

    /// Command metadata (name, description, autocomplete)
    fn command(&self) -> Command;

    /// Run the command with the text following the trigger.
    ///
    /// Returns `None` when the command is unavailable and should produce
    /// no response at all.
    async fn execute(&self, ctx: &CommandContext, message: &str) -> Option<CommandResponse>;
}

/// Who invoked a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandContext {
    /// Opaque user identifier
    pub user_id: String,
}

impl CommandContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Command metadata shown in command lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub trigger: String,
    pub display_name: String,
    pub description: String,
    /// Short argument hint, e.g. `[message]`
    #[serde(default)]
    pub hint: String,
    pub auto_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete_data: Option<AutocompleteData>,
}

impl Command {
    pub fn new(
        trigger: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            display_name: display_name.into(),
            description: description.into(),
            hint: String::new(),
            auto_complete: false,
            autocomplete_data: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Enable autocomplete with the given data
    pub fn with_autocomplete(mut self, data: AutocompleteData) -> Self {
        self.auto_complete = true;
        self.autocomplete_data = Some(data);
        self
    }
}

/// Autocomplete tree for one command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteData {
    pub trigger: String,
    #[serde(default)]
    pub hint: String,
    pub help_text: String,
    #[serde(default)]
    pub arguments: Vec<AutocompleteArgument>,
}

impl AutocompleteData {
    pub fn new(
        trigger: impl Into<String>,
        hint: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            hint: hint.into(),
            help_text: help_text.into(),
            arguments: Vec::new(),
        }
    }

    /// Add an argument chosen from a fixed list
    pub fn add_static_list_argument(
        &mut self,
        help_text: impl Into<String>,
        required: bool,
        items: Vec<AutocompleteListItem>,
    ) {
        self.arguments.push(AutocompleteArgument {
            help_text: help_text.into(),
            required,
            items,
        });
    }

    /// Items of the first argument whose value starts with `typed`.
    ///
    /// Hint-only items (empty value) always match.
    pub fn suggest(&self, typed: &str) -> Vec<&AutocompleteListItem> {
        self.arguments
            .first()
            .map(|argument| {
                argument
                    .items
                    .iter()
                    .filter(|item| item.item.is_empty() || item.item.starts_with(typed))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Static-list argument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteArgument {
    #[serde(default)]
    pub help_text: String,
    pub required: bool,
    pub items: Vec<AutocompleteListItem>,
}

/// One choice of a static-list argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteListItem {
    /// Value inserted on selection; empty for hint-only entries
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub hint: String,
    pub help_text: String,
}

impl AutocompleteListItem {
    pub fn new(item: impl Into<String>, help_text: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            hint: String::new(),
            help_text: help_text.into(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Visibility of a command response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Shown only to the invoking user
    Ephemeral,
    /// Posted to the channel
    InChannel,
}

/// Reply produced by a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl CommandResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }

    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }
}
