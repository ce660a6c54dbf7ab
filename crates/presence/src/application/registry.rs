//! Command Registry
//!
//! Holds the command providers registered at startup and routes
//! `/trigger message` input to them.

use std::collections::HashMap;
use std::sync::Arc;

use super::{CustomStatusFeatures, CustomStatusProvider};
use crate::domain::errors::DomainError;
use crate::ports::{Command, CommandContext, CommandProvider, CommandResponse, StatusService};

/// Raw slash command split into trigger and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand<'a> {
    /// Lower-cased trigger, without `/`
    pub trigger: String,
    /// Everything after the first space, unmodified
    pub message: &'a str,
}

impl<'a> SlashCommand<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, DomainError> {
        let body = raw
            .strip_prefix('/')
            .ok_or_else(|| DomainError::Validation(format!("Command must start with '/': {}", raw)))?;
        let (trigger, message) = body.split_once(' ').unwrap_or((body, ""));
        if trigger.is_empty() {
            return Err(DomainError::Validation("Missing command trigger".into()));
        }

        Ok(Self {
            trigger: trigger.to_lowercase(),
            message,
        })
    }
}

/// Registry of slash command providers, keyed by trigger
#[derive(Default)]
pub struct CommandRegistry {
    providers: HashMap<String, Arc<dyn CommandProvider>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `/status` command
    pub fn with_builtin<S: StatusService + 'static>(
        service: Arc<S>,
        features: CustomStatusFeatures,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CustomStatusProvider::new(service, features)));
        registry
    }

    /// Register a provider under its trigger, replacing any previous one
    pub fn register(&mut self, provider: Arc<dyn CommandProvider>) {
        let trigger = provider.trigger().to_lowercase();
        if self.providers.insert(trigger.clone(), provider).is_some() {
            tracing::warn!(trigger = %trigger, "Replaced existing command provider");
        } else {
            tracing::debug!(trigger = %trigger, "Registered command provider");
        }
    }

    /// Provider for `trigger`, matched case-insensitively
    pub fn get(&self, trigger: &str) -> Option<&Arc<dyn CommandProvider>> {
        self.providers.get(&trigger.to_lowercase())
    }

    /// Metadata of all registered commands, sorted by trigger
    pub fn commands(&self) -> Vec<Command> {
        let mut commands: Vec<Command> = self.providers.values().map(|p| p.command()).collect();
        commands.sort_by(|a, b| a.trigger.cmp(&b.trigger));
        commands
    }

    /// Parse `raw` and run the matching provider
    pub async fn execute(
        &self,
        ctx: &CommandContext,
        raw: &str,
    ) -> Result<Option<CommandResponse>, DomainError> {
        let command = SlashCommand::parse(raw)?;
        let provider = self
            .get(&command.trigger)
            .ok_or_else(|| DomainError::not_found("Command", &command.trigger))?;

        tracing::debug!(trigger = %command.trigger, user_id = %ctx.user_id, "Executing command");
        Ok(provider.execute(ctx, command.message).await)
    }
}
