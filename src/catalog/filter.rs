//! Search, category and complexity filtering over the catalog.

use super::entry::{MAX_COMPLEXITY, MIN_COMPLEXITY, PhraseEntry};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::RangeInclusive;
use tracing::instrument;

/// Criteria a phrase must meet to be listed or drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseFilter {
    search: Option<String>,
    category: Option<String>,
    complexity: RangeInclusive<u8>,
}

impl PhraseFilter {
    /// A filter that matches every phrase.
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            complexity: MIN_COMPLEXITY..=MAX_COMPLEXITY,
        }
    }

    /// Matches phrases whose text or translation contains `term`,
    /// ignoring case. A blank term matches everything.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then(|| term.trim().to_lowercase());
        self
    }

    /// Matches a single category exactly.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Matches complexity levels within the inclusive range.
    pub fn with_complexity(mut self, range: RangeInclusive<u8>) -> Self {
        self.complexity = range;
        self
    }

    /// Matches one complexity level exactly.
    pub fn with_level(self, level: u8) -> Self {
        self.with_complexity(level..=level)
    }

    /// Checks if the phrase meets every criterion.
    pub fn matches(&self, entry: &PhraseEntry) -> bool {
        let matches_search = self.search.as_ref().is_none_or(|term| {
            entry.phrase().to_lowercase().contains(term)
                || entry.translation().to_lowercase().contains(term)
        });
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|category| entry.category() == category);
        let matches_complexity = self.complexity.contains(entry.complexity_level());

        matches_search && matches_category && matches_complexity
    }
}

impl Default for PhraseFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Listing order for catalog phrases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PhraseSort {
    /// By phrase text, A to Z.
    #[default]
    Alphabetical,
    /// Most complex first.
    Complexity,
    /// By category name, A to Z.
    Category,
}

impl PhraseSort {
    /// Compares two phrases under this ordering.
    pub fn compare(self, a: &PhraseEntry, b: &PhraseEntry) -> Ordering {
        match self {
            PhraseSort::Alphabetical => a.phrase().to_lowercase().cmp(&b.phrase().to_lowercase()),
            PhraseSort::Complexity => b.complexity_level().cmp(a.complexity_level()),
            PhraseSort::Category => a.category().cmp(b.category()),
        }
    }

    /// Sorts phrases in place. The sort is stable.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn sort<T: AsRef<PhraseEntry>>(self, entries: &mut [T]) {
        entries.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}
