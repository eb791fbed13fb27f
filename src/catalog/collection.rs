//! The curated collection of the most non-sensical phrases, paged.

use super::entry::PhraseEntry;
use derive_getters::Getters;
use std::sync::Arc;

/// Lowest complexity level admitted to the collection.
pub const COLLECTION_MIN_LEVEL: u8 = 7;

/// Phrases per collection page.
pub const COLLECTION_PAGE_SIZE: usize = 12;

/// One page of the curated collection.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CollectionPage {
    /// Phrases on this page, highest complexity first.
    entries: Vec<Arc<PhraseEntry>>,
    /// One-based page number actually shown.
    page: usize,
    /// Number of pages, at least 1.
    total_pages: usize,
    /// Phrases in the whole collection.
    total: usize,
}

impl CollectionPage {
    /// Pages through `entries`, keeping only collection-worthy phrases.
    ///
    /// The requested page is clamped to `1..=total_pages`.
    pub(super) fn build(entries: &[Arc<PhraseEntry>], requested: usize) -> Self {
        let mut curated: Vec<_> = entries
            .iter()
            .filter(|entry| *entry.complexity_level() >= COLLECTION_MIN_LEVEL)
            .cloned()
            .collect();
        curated.sort_by(|a, b| b.complexity_level().cmp(a.complexity_level()));

        let total = curated.len();
        let total_pages = total.div_ceil(COLLECTION_PAGE_SIZE).max(1);
        let page = requested.clamp(1, total_pages);

        let entries = curated
            .into_iter()
            .skip((page - 1) * COLLECTION_PAGE_SIZE)
            .take(COLLECTION_PAGE_SIZE)
            .collect();

        Self {
            entries,
            page,
            total_pages,
            total,
        }
    }

    /// Checks if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Checks if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
