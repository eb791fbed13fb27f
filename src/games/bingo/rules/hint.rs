//! Hint search: find a single mark that would complete a line.

use super::super::{Board, Coord, SelectionSet};
use super::win::lines;
use tracing::instrument;

/// Returns a cell whose marking would complete a line.
///
/// Lines are scanned in win-detection order; the first line missing
/// exactly one cell yields that cell. Returns `None` when no single
/// mark wins.
#[instrument(skip(board, selection), fields(marked = selection.len()))]
pub fn find_winning_move(board: &Board, selection: &SelectionSet) -> Option<Coord> {
    lines(board.side()).into_iter().find_map(|line| {
        let mut missing = line
            .cells
            .into_iter()
            .filter(|coord| !selection.contains(coord) && !board.is_free(*coord));
        match (missing.next(), missing.next()) {
            (Some(coord), None) => Some(coord),
            _ => None,
        }
    })
}
