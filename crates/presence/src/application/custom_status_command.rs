//! `/status` command provider
//!
//! Wraps the interpreter with feature gating, failure logging and the
//! user-facing reply text.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StatusCommandInterpreter;
use crate::domain::{
    CommandOutcome, CustomStatus, FailureKind, Preset, CLEAR_KEYWORD, PREV_KEYWORD,
};
use crate::ports::{
    AutocompleteData, AutocompleteListItem, Command, CommandContext, CommandProvider,
    CommandResponse, StatusService,
};

pub const CUSTOM_STATUS_TRIGGER: &str = "status";

const DESCRIPTION: &str = "Set or clear your status";
const HINT: &str = "[:emoji_name:] [status_message] or clear";

const CLEARED_TEXT: &str = "Your status was cleared.";
const CLEAR_ERROR_TEXT: &str = "Error clearing the status.";
const SET_ERROR_TEXT: &str = "Error setting the status.";

/// Switches that must both be on for `/status` to respond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStatusFeatures {
    /// Server-wide feature flag
    #[serde(default = "enabled")]
    pub custom_user_statuses: bool,
    /// Team setting
    #[serde(default = "enabled")]
    pub enable_custom_user_statuses: bool,
}

fn enabled() -> bool {
    true
}

impl CustomStatusFeatures {
    pub fn is_enabled(&self) -> bool {
        self.custom_user_statuses && self.enable_custom_user_statuses
    }
}

impl Default for CustomStatusFeatures {
    fn default() -> Self {
        Self {
            custom_user_statuses: true,
            enable_custom_user_statuses: true,
        }
    }
}

/// Command provider for `/status`
pub struct CustomStatusProvider<S: StatusService> {
    interpreter: StatusCommandInterpreter<S>,
    features: CustomStatusFeatures,
}

impl<S: StatusService> CustomStatusProvider<S> {
    pub fn new(service: Arc<S>, features: CustomStatusFeatures) -> Self {
        Self {
            interpreter: StatusCommandInterpreter::new(service),
            features,
        }
    }

    /// Autocomplete tree: control keywords, presets, then free text
    pub fn autocomplete_data() -> AutocompleteData {
        let mut items = vec![
            AutocompleteListItem::new(CLEAR_KEYWORD, "Clear your custom status"),
            AutocompleteListItem::new(PREV_KEYWORD, "Set previous custom status"),
        ];
        items.extend(Preset::ALL.iter().map(|preset| {
            AutocompleteListItem::new(preset.keyword(), preset.help_text()).with_hint(preset.hint())
        }));
        items.push(
            AutocompleteListItem::new("", "Set custom status").with_hint("[:emoji_name:] [message]"),
        );

        let mut data = AutocompleteData::new(CUSTOM_STATUS_TRIGGER, "", DESCRIPTION);
        data.add_static_list_argument("", true, items);
        data
    }

    fn respond(outcome: &CommandOutcome) -> CommandResponse {
        match outcome {
            CommandOutcome::Cleared | CommandOutcome::RestoredEmpty => {
                CommandResponse::ephemeral(CLEARED_TEXT)
            }
            CommandOutcome::RestoredWithValue(status) | CommandOutcome::SetWithValue(status) => {
                CommandResponse::ephemeral(success_text(status))
            }
            CommandOutcome::Failed(failure) if failure.kind == FailureKind::Remove => {
                CommandResponse::ephemeral(CLEAR_ERROR_TEXT)
            }
            CommandOutcome::Failed(_) => CommandResponse::ephemeral(SET_ERROR_TEXT),
        }
    }
}

fn success_text(status: &CustomStatus) -> String {
    format!(
        "Your status is set to \"{} {}\".",
        status.display_emoji(),
        status.text
    )
}

#[async_trait]
impl<S: StatusService + 'static> CommandProvider for CustomStatusProvider<S> {
    fn trigger(&self) -> &str {
        CUSTOM_STATUS_TRIGGER
    }

    fn command(&self) -> Command {
        Command::new(CUSTOM_STATUS_TRIGGER, CUSTOM_STATUS_TRIGGER, DESCRIPTION)
            .with_hint(HINT)
            .with_autocomplete(Self::autocomplete_data())
    }

    async fn execute(&self, ctx: &CommandContext, message: &str) -> Option<CommandResponse> {
        if !self.features.is_enabled() {
            tracing::debug!(user_id = %ctx.user_id, "Custom statuses disabled, ignoring command");
            return None;
        }

        let outcome = self.interpreter.interpret(&ctx.user_id, message).await;
        match &outcome {
            CommandOutcome::Failed(failure) => {
                tracing::error!(
                    user_id = %ctx.user_id,
                    kind = ?failure.kind,
                    error = %failure.source,
                    "Custom status command failed"
                );
            }
            _ => {
                tracing::info!(
                    user_id = %ctx.user_id,
                    status = ?outcome.status(),
                    "Custom status command handled"
                );
            }
        }

        Some(Self::respond(&outcome))
    }
}
