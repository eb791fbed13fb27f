//! Phrase catalog: loading, validation and filtering of jargon phrases.
//!
//! The catalog is the read-only source of the phrase pool that bingo
//! boards are drawn from.

mod collection;
mod entry;
mod favorites;
mod filter;

pub use collection::{COLLECTION_MIN_LEVEL, COLLECTION_PAGE_SIZE, CollectionPage};
pub use entry::{ComplexityTier, MAX_COMPLEXITY, MIN_COMPLEXITY, PhraseEntry};
pub use favorites::{FavoriteSort, Favorites};
pub use filter::{PhraseFilter, PhraseSort};

use derive_more::{Display, Error};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Immutable collection of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCatalog {
    entries: Vec<Arc<PhraseEntry>>,
}

impl PhraseCatalog {
    /// Builds a catalog, rejecting malformed entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a phrase is blank or its complexity
    /// level falls outside 1..=10.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn from_entries(entries: Vec<PhraseEntry>) -> Result<Self, CatalogError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.phrase().trim().is_empty() {
                warn!(index, "Blank phrase in catalog");
                return Err(CatalogError::new(format!("Entry {index} has a blank phrase")));
            }
            let level = *entry.complexity_level();
            if !(MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&level) {
                warn!(index, level, "Complexity level out of range");
                return Err(CatalogError::new(format!(
                    "Entry {index} ({:?}) has complexity {level}, expected {MIN_COMPLEXITY}..={MAX_COMPLEXITY}",
                    entry.phrase()
                )));
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parses a JSON array of phrase entries.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<PhraseEntry> = serde_json::from_str(json)
            .map_err(|e| CatalogError::new(format!("Failed to parse catalog: {}", e)))?;
        debug!(count = entries.len(), "Parsed catalog entries");
        Self::from_entries(entries)
    }

    /// Loads a catalog from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        debug!("Loading catalog from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read catalog file: {}", e)))?;

        let catalog = Self::from_json_str(&content)?;
        info!(phrases = catalog.len(), "Catalog loaded successfully");
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    #[instrument]
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[Arc<PhraseEntry>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.category().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of phrases in each category, keyed by category name.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category().clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Looks up an entry by its exact phrase text.
    pub fn find(&self, phrase: &str) -> Option<&Arc<PhraseEntry>> {
        self.entries.iter().find(|entry| entry.phrase() == phrase)
    }

    /// One page of the curated collection: phrases at level 7 or above,
    /// most complex first, twelve per page.
    #[instrument(skip(self))]
    pub fn collection(&self, page: usize) -> CollectionPage {
        let page = CollectionPage::build(&self.entries, page);
        debug!(
            page = page.page(),
            total_pages = page.total_pages(),
            "Built collection page"
        );
        page
    }

    /// Entries matching the filter, in load order.
    ///
    /// This is the phrase pool handed to a bingo session.
    #[instrument(skip(self))]
    pub fn pool(&self, filter: &PhraseFilter) -> Vec<Arc<PhraseEntry>> {
        let pool: Vec<_> = self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        debug!(matched = pool.len(), total = self.len(), "Filtered phrase pool");
        pool
    }

    /// Entries matching the filter, sorted for display.
    pub fn list(&self, filter: &PhraseFilter, sort: PhraseSort) -> Vec<Arc<PhraseEntry>> {
        let mut entries = self.pool(filter);
        sort.sort(&mut entries);
        entries
    }
}

/// Catalog error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
