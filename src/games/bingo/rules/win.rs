//! Win detection logic for jargon bingo.

use super::super::{Board, Coord, LineKind, SelectionSet, WinningLine};
use tracing::instrument;

/// Every candidate line on a board of the given side, in scan order.
///
/// Rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal.
pub fn lines(side: usize) -> Vec<WinningLine> {
    let rows = (0..side).map(|row| {
        WinningLine::new(
            LineKind::Row,
            (0..side).map(|col| Coord::new(row, col)).collect(),
        )
    });
    let columns = (0..side).map(|col| {
        WinningLine::new(
            LineKind::Column,
            (0..side).map(|row| Coord::new(row, col)).collect(),
        )
    });
    let main = WinningLine::new(
        LineKind::Diagonal,
        (0..side).map(|i| Coord::new(i, i)).collect(),
    );
    let anti = WinningLine::new(
        LineKind::Diagonal,
        (0..side).map(|i| Coord::new(i, side - 1 - i)).collect(),
    );

    rows.chain(columns).chain([main, anti]).collect()
}

/// Checks if every cell on the line is marked or is the free space.
pub fn is_complete(board: &Board, selection: &SelectionSet, line: &WinningLine) -> bool {
    line.cells
        .iter()
        .all(|coord| selection.contains(coord) || board.is_free(*coord))
}

/// Returns the first complete line in scan order, if any.
///
/// Pure: neither the board nor the selection is modified.
#[instrument(skip(board, selection), fields(marked = selection.len()))]
pub fn check_win(board: &Board, selection: &SelectionSet) -> Option<WinningLine> {
    lines(board.side())
        .into_iter()
        .find(|line| is_complete(board, selection, line))
}
