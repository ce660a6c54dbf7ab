//! StatusCommand - Grammar of the custom status command arguments
//!
//! ```text
//! clear...                      remove the current status
//! prev...                       restore the previous status
//! away|home|office|meeting ...  preset, rest of the line appended in parens
//! :emoji_name: message          explicit emoji
//! message                       default emoji
//! ```
//!
//! Keywords are matched as plain, case-sensitive prefixes of the message as
//! received, so `clearance` is a clear and ` clear` is free text.

use super::{split_leading_emoji, Preset};
use crate::domain::entities::CustomStatus;

pub const CLEAR_KEYWORD: &str = "clear";
pub const PREV_KEYWORD: &str = "prev";

/// What a command message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCommand {
    /// Remove the current status
    Clear,
    /// Reinstate the previously used status
    RestorePrevious,
    /// Set a new status (text not yet length-trimmed)
    Set(CustomStatus),
}

impl StatusCommand {
    /// Classify a command message. First match wins.
    pub fn parse(message: &str) -> Self {
        if message.starts_with(CLEAR_KEYWORD) {
            return StatusCommand::Clear;
        }
        if message.starts_with(PREV_KEYWORD) {
            return StatusCommand::RestorePrevious;
        }

        let status = match Preset::match_prefix(message) {
            Some((preset, detail)) => preset.status(detail),
            None => match split_leading_emoji(message) {
                Some((emoji, rest)) => CustomStatus::new(emoji, rest.trim()),
                None => CustomStatus::with_default_emoji(message.trim()),
            },
        };
        StatusCommand::Set(status)
    }
}
