//! Preset - Named status shortcuts

use crate::domain::entities::CustomStatus;

/// Reserved keyword mapping to a fixed emoji and base text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Away,
    Home,
    Office,
    Meeting,
}

impl Preset {
    /// All presets, in matching order
    pub const ALL: [Preset; 4] = [Preset::Away, Preset::Home, Preset::Office, Preset::Meeting];

    /// Keyword typed after the trigger
    pub fn keyword(&self) -> &'static str {
        match self {
            Preset::Away => "away",
            Preset::Home => "home",
            Preset::Office => "office",
            Preset::Meeting => "meeting",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Preset::Away => "car",
            Preset::Home => "house",
            Preset::Office => "office",
            Preset::Meeting => "telephone",
        }
    }

    pub fn base_text(&self) -> &'static str {
        match self {
            Preset::Away => "Away",
            Preset::Home => "Working from home",
            Preset::Office => "At the office",
            Preset::Meeting => "In a meeting",
        }
    }

    /// Argument hint shown by autocomplete. `[HH:MM]` is never parsed.
    pub fn hint(&self) -> &'static str {
        match self {
            Preset::Away | Preset::Meeting => "[HH:MM] [message]",
            Preset::Home | Preset::Office => "[message]",
        }
    }

    pub fn help_text(&self) -> String {
        format!("Set your custom status to '{}'", self.base_text())
    }

    /// Find the preset whose keyword prefixes `message`.
    ///
    /// Plain prefix test: `awayday` matches `away`. Returns the preset and
    /// the text following the keyword, untrimmed.
    pub fn match_prefix(message: &str) -> Option<(Preset, &str)> {
        Self::ALL.into_iter().find_map(|preset| {
            message
                .strip_prefix(preset.keyword())
                .map(|rest| (preset, rest))
        })
    }

    /// Build the status for this preset, appending ` (detail)` when given
    pub fn status(&self, detail: &str) -> CustomStatus {
        let detail = detail.trim();
        let text = if detail.is_empty() {
            self.base_text().to_string()
        } else {
            format!("{} ({})", self.base_text(), detail)
        };
        CustomStatus::new(self.emoji(), text)
    }
}
