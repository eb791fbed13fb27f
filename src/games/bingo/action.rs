//! First-class command types for jargon bingo.
//!
//! Commands are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use super::powerups::PowerUp;
use super::types::{BoardSize, Coord};
use serde::{Deserialize, Serialize};

/// A command accepted by a [`GameSession`](super::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Start a fresh round on a newly generated board.
    #[display("new game {}", _0)]
    NewGame(BoardSize),
    /// Mark a cell.
    #[display("mark {}", _0)]
    Select(Coord),
    /// Spend one charge of a power-up.
    #[display("use {}", _0)]
    UsePowerUp(PowerUp),
}

/// Error that can occur when validating or applying a command.
///
/// Redundant commands (marking a marked cell, using an exhausted power-up)
/// are not errors; they are reported as ignored outcomes.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BingoError {
    /// The phrase pool cannot fill the board with distinct phrases.
    #[display("Phrase pool has {available} distinct phrases, board needs {required}")]
    InsufficientPool {
        /// Phrases needed for every non-free cell.
        required: usize,
        /// Distinct phrases available.
        available: usize,
    },

    /// A coordinate outside the board was referenced.
    #[display("Cell {coord} is outside the {side}x{side} board")]
    InvalidCoordinate {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the current board.
        side: usize,
    },

    /// The same phrase was placed twice on one board.
    #[display("Phrase {:?} appears more than once", _0)]
    DuplicatePhrase(#[error(not(source))] String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
