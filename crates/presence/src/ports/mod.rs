//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (status storage, command hosts).
//!
//! Implementations of the service traits live in the infrastructure layer.

pub mod command;
pub mod services;

// Re-exports
pub use command::*;
pub use services::*;
