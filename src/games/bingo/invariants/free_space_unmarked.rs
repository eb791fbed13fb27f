//! The free space is implied, never stored in the selection.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the free space never appears in the selection.
pub struct FreeSpaceUnmarkedInvariant;

impl Invariant<GameSession> for FreeSpaceUnmarkedInvariant {
    fn holds(session: &GameSession) -> bool {
        match session.board().and_then(|board| board.free_space()) {
            Some(free) => !session.selection().contains(&free),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Free space is never stored in the selection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bingo::Coord;
    use crate::games::bingo::test_support::playing_session;

    #[test]
    fn test_selecting_free_space_is_ignored() {
        let mut session = playing_session();
        session.select_cell(Coord::new(1, 1)).unwrap();
        assert!(FreeSpaceUnmarkedInvariant::holds(&session));
    }

    #[test]
    fn test_stored_free_space_violates() {
        let mut session = playing_session();
        session.selection.insert(Coord::new(1, 1));
        assert!(!FreeSpaceUnmarkedInvariant::holds(&session));
    }
}
