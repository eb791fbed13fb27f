//! Contract-based validation for jargon bingo.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::BingoError;
use super::invariants::{BingoInvariants, InvariantSet};
use super::session::GameSession;
use super::types::{Coord, SelectionSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BingoError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BingoError>;
}

// ─────────────────────────────────────────────────────────────
//  Selection Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the coordinate lies on the current board.
pub struct CellInBounds;

impl CellInBounds {
    /// Rejects coordinates off the board. Passes when there is no board.
    #[instrument(skip(session))]
    pub fn check(coord: &Coord, session: &GameSession) -> Result<(), BingoError> {
        match session.board() {
            Some(board) if !board.contains(*coord) => {
                warn!(%coord, side = board.side(), "Coordinate outside board");
                Err(BingoError::InvalidCoordinate {
                    coord: *coord,
                    side: board.side(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Postcondition: marks are only ever added by a selection.
pub struct SelectionGrows;

impl SelectionGrows {
    /// Checks that `after` kept every mark of `before` and added at most one.
    #[instrument(skip(before, after))]
    pub fn holds(before: &SelectionSet, after: &SelectionSet) -> bool {
        let valid = before.is_subset(after) && after.len() <= before.len() + 1;
        if !valid {
            warn!(
                before = before.len(),
                after = after.len(),
                "Selection did not grow monotonically"
            );
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Select Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for cell selection.
///
/// Preconditions:
/// - Coordinate lies on the board
///
/// Postconditions:
/// - Selection grows by at most one cell and loses none
/// - Session invariants hold
pub struct SelectContract;

impl Contract<GameSession, Coord> for SelectContract {
    fn pre(session: &GameSession, coord: &Coord) -> Result<(), BingoError> {
        CellInBounds::check(coord, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), BingoError> {
        Self::check_after(before.selection(), after)
    }
}

impl SelectContract {
    /// Postcondition check against a snapshot of the selection taken
    /// before the mark.
    pub fn check_after(before: &SelectionSet, after: &GameSession) -> Result<(), BingoError> {
        if !SelectionGrows::holds(before, after.selection()) {
            return Err(BingoError::InvariantViolation(
                "Postcondition failed: selection shrank".to_string(),
            ));
        }

        BingoInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BingoError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all session invariants hold (panic on violation in debug builds).
#[instrument(skip(session))]
pub fn assert_invariants(session: &GameSession) {
    debug_assert!(
        BingoInvariants::check_all(session).is_ok(),
        "Session invariants violated"
    );
}
