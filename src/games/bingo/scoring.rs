//! Score calculation and rank labels.

use super::types::{Board, Cell, SelectionSet};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Points awarded per complexity level of a marked phrase.
pub const POINTS_PER_LEVEL: u32 = 2;

/// Bonus awarded for completing a line.
pub const WIN_BONUS: u32 = 50;

/// Scores the marked cells, plus the win bonus when the round was won.
#[instrument(skip(board, selection), fields(marked = selection.len()))]
pub fn score(board: &Board, selection: &SelectionSet, won: bool) -> u32 {
    let marked: u32 = selection
        .iter()
        .filter_map(|coord| board.get(*coord))
        .filter_map(Cell::phrase)
        .map(|entry| u32::from(*entry.complexity_level()) * POINTS_PER_LEVEL)
        .sum();

    if won { marked + WIN_BONUS } else { marked }
}

/// Rank label for a score.
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
    strum::Display,
)]
pub enum ScoreRank {
    /// Below 100 points.
    #[strum(to_string = "Keep collecting Non-sensical phrases!")]
    Rookie,
    /// 100 points or more.
    #[strum(to_string = "Getting more Non-sensical!")]
    GettingThere,
    /// 200 points or more.
    #[strum(to_string = "Professional Jargonist!")]
    Professional,
    /// 300 points or more.
    #[strum(to_string = "Non-sensical Expert! Keep it up!")]
    Expert,
    /// 500 points or more.
    #[strum(to_string = "Non-sensical Level: PhD!")]
    Doctorate,
}

impl ScoreRank {
    /// Returns the rank for the given score.
    pub fn for_score(score: u32) -> Self {
        match score {
            500.. => ScoreRank::Doctorate,
            300.. => ScoreRank::Expert,
            200.. => ScoreRank::Professional,
            100.. => ScoreRank::GettingThere,
            _ => ScoreRank::Rookie,
        }
    }
}
