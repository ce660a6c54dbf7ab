//! Presence Library
//!
//! Custom status slash command: grammar, ports and command dispatch.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (CustomStatus, StatusHistory)
//!   - `value_objects/`: Immutable value types (Preset, StatusCommand, CommandOutcome)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Status persistence interface
//!   - `command`: Slash command provider interface and metadata
//!
//! - **Application Layer** (`application/`): Use cases
//!   - `StatusCommandInterpreter`: argument text to status-service calls
//!   - `CustomStatusProvider`: the `/status` command
//!   - `CommandRegistry`: registration and dispatch by trigger
//!
//! # Usage
//!
//! ```rust,ignore
//! use presence::{CommandContext, CommandRegistry, CustomStatusFeatures};
//!
//! let registry = CommandRegistry::with_builtin(store, CustomStatusFeatures::default());
//! let response = registry.execute(&CommandContext::new("u1"), "/status away").await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{
    CommandRegistry, CustomStatusFeatures, CustomStatusProvider, SlashCommand,
    StatusCommandInterpreter, CUSTOM_STATUS_TRIGGER,
};
pub use domain::{
    CommandFailure, CommandOutcome, CustomStatus, DomainError, FailureKind, Preset,
    StatusCommand, StatusHistory, DEFAULT_EMOJI,
};
pub use ports::{
    AutocompleteArgument, AutocompleteData, AutocompleteListItem, Command, CommandContext,
    CommandProvider, CommandResponse, ResponseType, StatusService,
};
