//! Phrase records and their complexity tiers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Lowest complexity level a phrase may carry.
pub const MIN_COMPLEXITY: u8 = 1;

/// Highest complexity level a phrase may carry.
pub const MAX_COMPLEXITY: u8 = 10;

/// A jargon phrase with its plain-language translation.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct PhraseEntry {
    /// The jargon as spoken.
    phrase: String,
    /// What it actually means.
    #[serde(alias = "meaning")]
    translation: String,
    /// Catalog category, e.g. "Meetings".
    category: String,
    /// How impenetrable the phrase is, 1 through 10.
    #[serde(alias = "bsLevel")]
    complexity_level: u8,
}

impl PhraseEntry {
    /// Returns the display tier for this phrase's complexity.
    pub fn tier(&self) -> ComplexityTier {
        ComplexityTier::for_level(self.complexity_level)
    }

    /// Text suitable for copying or sharing.
    pub fn share_text(&self) -> String {
        format!("\"{}\" means: {}", self.phrase, self.translation)
    }
}

impl AsRef<PhraseEntry> for PhraseEntry {
    fn as_ref(&self) -> &PhraseEntry {
        self
    }
}

/// Display bucket for complexity levels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ComplexityTier {
    /// Levels 1 through 4.
    #[strum(to_string = "Basic")]
    Basic,
    /// Levels 5 and 6.
    #[strum(to_string = "Moderately Non-sensical")]
    Moderate,
    /// Levels 7 and 8.
    #[strum(to_string = "Highly Non-sensical")]
    High,
    /// Levels 9 and 10.
    #[strum(to_string = "Ultra Non-sensical")]
    Ultra,
}

impl ComplexityTier {
    /// Returns the tier for a complexity level.
    pub fn for_level(level: u8) -> Self {
        match level {
            9.. => ComplexityTier::Ultra,
            7.. => ComplexityTier::High,
            5.. => ComplexityTier::Moderate,
            _ => ComplexityTier::Basic,
        }
    }
}
