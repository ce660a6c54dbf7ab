//! Emoji shortcode detection (`:name:`)

use std::sync::LazyLock;

use regex::Regex;

/// Emoji used when a command does not name one
pub const DEFAULT_EMOJI: &str = "speech_balloon";

/// Colon-delimited emoji shortcode. Names are not checked against an emoji set.
static EMOJI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[a-zA-Z0-9_+-]+:").expect("emoji pattern is valid"));

/// Split a leading `:name:` token off `message`.
///
/// Only the first shortcode in the message is considered, and it must start
/// at offset 0. Returns the name without colons and the rest of the message.
pub fn split_leading_emoji(message: &str) -> Option<(&str, &str)> {
    let token = EMOJI_PATTERN.find(message)?;
    if token.start() != 0 {
        return None;
    }
    let name = &message[token.start() + 1..token.end() - 1];
    Some((name, &message[token.end()..]))
}
