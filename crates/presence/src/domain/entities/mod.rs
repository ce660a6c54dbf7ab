//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - CustomStatus: Emoji + message pair
//! - StatusHistory: Current and recent statuses of one user

mod custom_status;
mod status_history;

pub use custom_status::*;
pub use status_history::*;
