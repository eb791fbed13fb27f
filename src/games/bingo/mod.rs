//! Jargon bingo: board generation, win detection, power-ups and the
//! timed session state machine.

mod action;
mod contracts;
mod generator;
mod invariants;
mod powerups;
mod rules;
mod scoring;
mod session;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use action::{BingoError, Command};
pub use contracts::{CellInBounds, Contract, SelectContract, SelectionGrows};
pub use generator::generate_board;
pub use invariants::{
    BingoInvariants, FreeSpaceUnmarkedInvariant, Invariant, InvariantSet, InvariantViolation,
    InventoryBoundedInvariant, SelectionHistoryInvariant, SelectionInBoundsInvariant,
};
pub use powerups::{Allotment, PowerUp, PowerUpInventory};
pub use rules::{check_win, find_winning_move, is_complete, lines};
pub use scoring::{POINTS_PER_LEVEL, ScoreRank, WIN_BONUS, score};
pub use session::{
    GameSession, Phase, PowerUpOutcome, SelectOutcome, TickOutcome, TimerToken, Transition,
};
pub use types::{Board, BoardSize, Cell, Coord, LineKind, SelectionSet, WinningLine};
