//! Board generation from a phrase pool.

use super::action::BingoError;
use super::types::{Board, BoardSize};
use crate::catalog::PhraseEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Generates a board by drawing distinct phrases uniformly at random.
///
/// Phrases are distinct by their text; repeated entries in the pool
/// count once. The free space sits in the center of odd-sized boards.
///
/// # Errors
///
/// Returns [`BingoError::InsufficientPool`] if the pool has fewer
/// distinct phrases than the board has non-free cells. The random
/// source is not advanced in that case.
#[instrument(skip(pool, rng), fields(pool_size = pool.len()))]
pub fn generate_board<R: Rng + ?Sized>(
    pool: &[Arc<PhraseEntry>],
    size: BoardSize,
    rng: &mut R,
) -> Result<Board, BingoError> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<Arc<PhraseEntry>> = pool
        .iter()
        .filter(|entry| seen.insert(entry.phrase().clone()))
        .cloned()
        .collect();

    let required = size.phrase_count();
    if distinct.len() < required {
        warn!(
            required,
            available = distinct.len(),
            "Phrase pool too small for board"
        );
        return Err(BingoError::InsufficientPool {
            required,
            available: distinct.len(),
        });
    }

    let (drawn, _) = distinct.partial_shuffle(rng, required);
    debug!(drawn = drawn.len(), "Drew phrases for board");

    Board::from_phrases(size, drawn.to_vec())
}
