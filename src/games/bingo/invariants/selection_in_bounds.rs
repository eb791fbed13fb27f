//! Marked cells lie on the board.

use super::super::GameSession;
use super::Invariant;

/// Invariant: every marked coordinate is on the current board.
///
/// Without a board the selection must be empty.
pub struct SelectionInBoundsInvariant;

impl Invariant<GameSession> for SelectionInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        match session.board() {
            Some(board) => session.selection().iter().all(|coord| board.contains(*coord)),
            None => session.selection().is_empty(),
        }
    }

    fn description() -> &'static str {
        "Marked cells lie on the board"
    }
}
