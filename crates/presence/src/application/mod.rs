//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates with the
//! status service and command hosts.

mod custom_status_command;
mod registry;
mod status_interpreter;

#[cfg(test)]
mod test_support;

pub use custom_status_command::{CustomStatusFeatures, CustomStatusProvider, CUSTOM_STATUS_TRIGGER};
pub use registry::{CommandRegistry, SlashCommand};
pub use status_interpreter::StatusCommandInterpreter;
