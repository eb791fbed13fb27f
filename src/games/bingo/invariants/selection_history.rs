//! Selection/history invariant: the marked set is exactly the history.

use super::super::{GameSession, SelectionSet};
use super::Invariant;

/// Invariant: history holds each marked cell once, and nothing else.
///
/// Undo pops from history and selection together, so the two can only
/// drift apart through a bug.
pub struct SelectionHistoryInvariant;

impl Invariant<GameSession> for SelectionHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        let replayed: SelectionSet = session.history().iter().copied().collect();
        replayed.len() == session.history().len() && replayed == *session.selection()
    }

    fn description() -> &'static str {
        "Selection matches history without repeats"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bingo::Coord;
    use crate::games::bingo::test_support::playing_session;

    #[test]
    fn test_marks_hold() {
        let mut session = playing_session();
        session.select_cell(Coord::new(0, 0)).unwrap();
        session.select_cell(Coord::new(0, 1)).unwrap();
        assert!(SelectionHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_history_violates() {
        let mut session = playing_session();
        session.select_cell(Coord::new(0, 0)).unwrap();
        session.history.push(Coord::new(0, 0));
        assert!(!SelectionHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_selection_without_history_violates() {
        let mut session = playing_session();
        session.selection.insert(Coord::new(2, 2));
        assert!(!SelectionHistoryInvariant::holds(&session));
    }
}
