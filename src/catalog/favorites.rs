//! In-memory favorite phrases.

use super::entry::PhraseEntry;
use super::filter::PhraseFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Listing order for favorites.
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
pub enum FavoriteSort {
    /// Most recently added first.
    #[default]
    #[strum(to_string = "newest", serialize = "date")]
    Newest,
    /// Highest complexity first.
    #[strum(to_string = "complexity", serialize = "level")]
    Complexity,
    /// By phrase text, A to Z.
    #[strum(to_string = "alphabetical", serialize = "alpha")]
    Alphabetical,
}

/// Phrases the player starred, keyed by phrase text, in the order added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<Arc<PhraseEntry>>,
}

impl Favorites {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if a phrase with this text is a favorite.
    pub fn contains(&self, phrase: &str) -> bool {
        self.position(phrase).is_some()
    }

    /// Adds the phrase unless its text is already present.
    ///
    /// Returns true if it was added.
    #[instrument(skip(self, entry), fields(phrase = %entry.phrase()))]
    pub fn add(&mut self, entry: Arc<PhraseEntry>) -> bool {
        if self.contains(entry.phrase()) {
            return false;
        }
        self.entries.push(entry);
        debug!(count = self.entries.len(), "Favorite added");
        true
    }

    /// Removes the phrase with this text. Returns true if it was present.
    #[instrument(skip(self))]
    pub fn remove(&mut self, phrase: &str) -> bool {
        match self.position(phrase) {
            Some(index) => {
                self.entries.remove(index);
                debug!(count = self.entries.len(), "Favorite removed");
                true
            }
            None => false,
        }
    }

    /// Adds the phrase if absent, removes it if present.
    ///
    /// Returns true if the phrase is a favorite afterwards.
    pub fn toggle(&mut self, entry: Arc<PhraseEntry>) -> bool {
        if self.remove(entry.phrase()) {
            false
        } else {
            self.add(entry)
        }
    }

    /// Favorites in the order they were added.
    pub fn entries(&self) -> &[Arc<PhraseEntry>] {
        &self.entries
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories among favorites, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.category().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct complexity levels among favorites, ascending.
    pub fn levels(&self) -> Vec<u8> {
        self.entries
            .iter()
            .map(|entry| *entry.complexity_level())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Favorites matching the filter, in the requested order.
    ///
    /// Ties under complexity or alphabetical order keep newest first.
    #[instrument(skip(self, filter), fields(count = self.entries.len()))]
    pub fn list(&self, filter: &PhraseFilter, sort: FavoriteSort) -> Vec<Arc<PhraseEntry>> {
        let mut listed: Vec<_> = self
            .entries
            .iter()
            .rev()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();

        match sort {
            FavoriteSort::Newest => {}
            FavoriteSort::Complexity => {
                listed.sort_by(|a, b| b.complexity_level().cmp(a.complexity_level()))
            }
            FavoriteSort::Alphabetical => {
                listed.sort_by_key(|entry| entry.phrase().to_lowercase())
            }
        }
        listed
    }

    fn position(&self, phrase: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.phrase() == phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(phrase: &str, category: &str, level: u8) -> Arc<PhraseEntry> {
        Arc::new(PhraseEntry::new(
            phrase.to_string(),
            format!("{phrase} explained"),
            category.to_string(),
            level,
        ))
    }

    fn starred() -> Favorites {
        let mut favorites = Favorites::new();
        favorites.add(entry("Synergy", "Buzzwords", 9));
        favorites.add(entry("Deep dive", "Meetings", 3));
        favorites.add(entry("Boil the ocean", "Strategy", 7));
        favorites
    }

    fn phrases(listed: &[Arc<PhraseEntry>]) -> Vec<&str> {
        listed.iter().map(|entry| entry.phrase().as_str()).collect()
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(entry("Synergy", "Buzzwords", 9)));
        assert!(favorites.contains("Synergy"));
        assert!(!favorites.toggle(entry("Synergy", "Buzzwords", 9)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_keyed_by_phrase_text() {
        let mut favorites = starred();
        assert!(!favorites.add(entry("Synergy", "Strategy", 2)));
        assert_eq!(favorites.len(), 3);
        assert!(favorites.remove("Synergy"));
        assert!(!favorites.remove("Synergy"));
    }

    #[test]
    fn test_newest_first_by_default() {
        let favorites = starred();
        let listed = favorites.list(&PhraseFilter::default(), FavoriteSort::default());
        assert_eq!(phrases(&listed), vec!["Boil the ocean", "Deep dive", "Synergy"]);
    }

    #[test]
    fn test_sorts() {
        let favorites = starred();
        let by_level = favorites.list(&PhraseFilter::default(), FavoriteSort::Complexity);
        assert_eq!(phrases(&by_level), vec!["Synergy", "Boil the ocean", "Deep dive"]);

        let by_name = favorites.list(&PhraseFilter::default(), FavoriteSort::Alphabetical);
        assert_eq!(phrases(&by_name), vec!["Boil the ocean", "Deep dive", "Synergy"]);
    }

    #[test]
    fn test_filter_by_exact_level_and_category() {
        let favorites = starred();
        let listed = favorites.list(&PhraseFilter::new().with_level(7), FavoriteSort::Newest);
        assert_eq!(phrases(&listed), vec!["Boil the ocean"]);

        let listed = favorites.list(
            &PhraseFilter::new().with_category("Meetings"),
            FavoriteSort::Newest,
        );
        assert_eq!(phrases(&listed), vec!["Deep dive"]);
    }

    #[test]
    fn test_categories_and_levels() {
        let favorites = starred();
        assert_eq!(favorites.categories(), vec!["Buzzwords", "Meetings", "Strategy"]);
        assert_eq!(favorites.levels(), vec![3, 7, 9]);
    }

    #[test]
    fn test_sort_aliases() {
        assert_eq!("date".parse::<FavoriteSort>().unwrap(), FavoriteSort::Newest);
        assert_eq!("alpha".parse::<FavoriteSort>().unwrap(), FavoriteSort::Alphabetical);
        assert_eq!(FavoriteSort::Complexity.to_string(), "complexity");
    }
}
