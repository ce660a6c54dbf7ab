//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod command_outcome;
mod emoji;
mod preset;
mod status_command;

pub use command_outcome::*;
pub use emoji::*;
pub use preset::*;
pub use status_command::*;
