//! Core domain types for jargon bingo.

use super::action::BingoError;
use crate::catalog::PhraseEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::instrument;

/// A cell coordinate on the board (zero-based).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

/// Set of coordinates the player has marked.
///
/// The free space is never stored here; win checks treat it as marked.
pub type SelectionSet = BTreeSet<Coord>;

/// Board dimensions selectable by difficulty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    /// 3x3 board with a free space in the center.
    #[default]
    #[strum(to_string = "3x3", serialize = "3", serialize = "easy")]
    Three,
    /// 4x4 board without a free space.
    #[strum(to_string = "4x4", serialize = "4", serialize = "hard")]
    Four,
}

impl BoardSize {
    /// Side length of the board.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
        }
    }

    /// Location of the free space, present only on odd-sized boards.
    pub fn free_space(self) -> Option<Coord> {
        let side = self.side();
        (side % 2 == 1).then(|| Coord::new(side / 2, side / 2))
    }

    /// Number of phrases required to fill every non-free cell.
    pub fn phrase_count(self) -> usize {
        let side = self.side();
        side * side - usize::from(self.free_space().is_some())
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = String;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            other => Err(format!("unsupported board size {other}, expected 3 or 4")),
        }
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.side() as u8
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Wildcard cell that always counts as marked.
    FreeSpace,
    /// A phrase drawn from the pool.
    Phrase(Arc<PhraseEntry>),
}

impl Cell {
    /// Returns the phrase held by this cell, if any.
    pub fn phrase(&self) -> Option<&PhraseEntry> {
        match self {
            Cell::FreeSpace => None,
            Cell::Phrase(entry) => Some(entry),
        }
    }

    /// Checks if this is the free space.
    pub fn is_free(&self) -> bool {
        matches!(self, Cell::FreeSpace)
    }
}

/// Square bingo board. Cells never change after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Lays phrases out in row-major order, skipping the free space.
    ///
    /// Phrases beyond the number of non-free cells are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InsufficientPool`] if there are fewer phrases
    /// than non-free cells, and
    /// [`BingoError::DuplicatePhrase`] if two phrases share the same text.
    #[instrument(skip(phrases), fields(count = phrases.len()))]
    pub fn from_phrases(size: BoardSize, phrases: Vec<Arc<PhraseEntry>>) -> Result<Self, BingoError> {
        let required = size.phrase_count();
        if phrases.len() < required {
            return Err(BingoError::InsufficientPool {
                required,
                available: phrases.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for entry in phrases.iter().take(required) {
            if !seen.insert(entry.phrase().as_str()) {
                return Err(BingoError::DuplicatePhrase(entry.phrase().clone()));
            }
        }

        let free = size.free_space();
        let side = size.side();
        let mut phrases = phrases.into_iter();
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                if free == Some(Coord::new(row, col)) {
                    cells.push(Cell::FreeSpace);
                } else if let Some(entry) = phrases.next() {
                    cells.push(Cell::Phrase(entry));
                }
            }
        }

        Ok(Self { size, cells })
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Checks if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.side() && coord.col < self.side()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if !self.contains(coord) {
            return None;
        }
        self.cells.get(coord.row * self.side() + coord.col)
    }

    /// Checks if the coordinate holds the free space.
    pub fn is_free(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_free)
    }

    /// Location of the free space, if the board has one.
    pub fn free_space(&self) -> Option<Coord> {
        self.size.free_space()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord::new(row, col)))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Marked cells are wrapped in brackets, the free space shows as `FREE`.
    pub fn display(&self, selection: &SelectionSet) -> String {
        const WIDTH: usize = 28;

        let mut result = String::new();
        for row in 0..self.side() {
            for col in 0..self.side() {
                let coord = Coord::new(row, col);
                let label = match self.get(coord) {
                    Some(Cell::FreeSpace) => "[FREE]".to_string(),
                    Some(Cell::Phrase(entry)) if selection.contains(&coord) => {
                        format!("[{}]", truncate(entry.phrase(), WIDTH - 2))
                    }
                    Some(Cell::Phrase(entry)) => truncate(entry.phrase(), WIDTH),
                    None => String::new(),
                };
                result.push_str(&format!("{row}{col} {label:<width$}", width = WIDTH));
                if col + 1 < self.side() {
                    result.push_str(" | ");
                }
            }
            result.push('\n');
        }
        result
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}

/// Orientation of a completed line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    /// A horizontal line.
    Row,
    /// A vertical line.
    Column,
    /// Either diagonal.
    Diagonal,
}

/// A line of cells; when complete it ends the round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinningLine {
    /// Orientation of the line.
    pub kind: LineKind,
    /// Coordinates along the line, in scan order.
    pub cells: Vec<Coord>,
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} {}", self.kind, cells)
    }
}
