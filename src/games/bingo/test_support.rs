//! Shared fixtures for unit tests.

use super::{BoardSize, GameSession};
use crate::catalog::PhraseEntry;
use crate::config::BingoConfig;
use std::sync::Arc;

/// Twenty distinct phrases with complexity cycling through 1..=10.
pub(crate) fn pool() -> Vec<Arc<PhraseEntry>> {
    (0..20)
        .map(|i| {
            Arc::new(PhraseEntry::new(
                format!("Synergize the deliverables #{i}"),
                format!("Do the work #{i}"),
                if i % 2 == 0 { "Meetings" } else { "Strategy" }.to_string(),
                (i % 10) as u8 + 1,
            ))
        })
        .collect()
}

/// An idle session with a fixed seed.
pub(crate) fn scripted_session() -> GameSession {
    GameSession::with_seed(pool(), BingoConfig::default(), 17)
}

/// A session with a 3x3 round running.
pub(crate) fn playing_session() -> GameSession {
    let mut session = scripted_session();
    session
        .new_game(BoardSize::Three)
        .expect("fixture pool fills a 3x3 board");
    session
}
