//! Game session state machine for jargon bingo.
//!
//! A [`GameSession`] is an owned value: callers hold it and feed it
//! commands and timer ticks one at a time. Phases run
//! `Idle → Playing → {Won, TimedOut}`; only a new game leaves a terminal
//! phase.

use super::action::{BingoError, Command};
use super::contracts::{Contract, SelectContract, assert_invariants};
use super::generator::generate_board;
use super::powerups::{PowerUp, PowerUpInventory};
use super::rules::{check_win, find_winning_move};
use super::scoring::{self, ScoreRank};
use super::types::{Board, BoardSize, Coord, SelectionSet, WinningLine};
use crate::catalog::PhraseEntry;
use crate::config::BingoConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No game has been started yet.
    Idle,
    /// A round is running; the timer is live.
    Playing,
    /// A line was completed.
    Won,
    /// The timer ran out first.
    TimedOut,
}

impl Phase {
    /// Returns true once the round is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::TimedOut)
    }
}

/// Generation stamp of a round, carried by timer ticks.
///
/// Every new game issues a fresh token, so ticks scheduled for a
/// superseded round are recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Result of marking a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: the cell was already marked, was the free space,
    /// or no round is running.
    Ignored,
    /// The cell was marked; no line is complete yet.
    Marked,
    /// The cell completed a line and won the round.
    Won(WinningLine),
}

/// Result of using a power-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerUpOutcome {
    /// No round is running or the power-up is exhausted; nothing changed.
    Unavailable,
    /// The most recent mark was removed; `None` when history was empty.
    Undone(Option<Coord>),
    /// A random cell was marked; `cell` is `None` when none was left.
    AutoMarked {
        /// The cell that was marked.
        cell: Option<Coord>,
        /// Effect of the mark.
        outcome: SelectOutcome,
    },
    /// A cell that would complete a line, if one exists.
    Hint(Option<Coord>),
}

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was stale or no round is running.
    Ignored,
    /// Seconds left after this tick.
    Running(u32),
    /// Time ran out and the round ended.
    TimedOut,
}

/// State transition reported by [`GameSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new round started.
    Started(TimerToken),
    /// A cell selection was processed.
    Selected(SelectOutcome),
    /// A power-up was processed.
    PowerUp(PowerUpOutcome),
}

/// A player's bingo session: the current round plus running totals.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) pool: Vec<Arc<PhraseEntry>>,
    pub(crate) config: BingoConfig,
    pub(crate) rng: StdRng,
    pub(crate) board: Option<Board>,
    pub(crate) selection: SelectionSet,
    pub(crate) history: Vec<Coord>,
    pub(crate) inventory: PowerUpInventory,
    pub(crate) remaining_secs: u32,
    pub(crate) games_won: u32,
    pub(crate) current_streak: u32,
    pub(crate) phase: Phase,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) generation: u64,
}

// ─────────────────────────────────────────────────────────────
//  Constructors
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Creates an idle session seeded from system entropy.
    #[instrument(skip(pool, config), fields(pool_size = pool.len()))]
    pub fn new(pool: Vec<Arc<PhraseEntry>>, config: BingoConfig) -> Self {
        Self::with_rng(pool, config, StdRng::from_entropy())
    }

    /// Creates an idle session with a reproducible random source.
    #[instrument(skip(pool, config), fields(pool_size = pool.len()))]
    pub fn with_seed(pool: Vec<Arc<PhraseEntry>>, config: BingoConfig, seed: u64) -> Self {
        Self::with_rng(pool, config, StdRng::seed_from_u64(seed))
    }

    /// Creates an idle session drawing from the given random source.
    pub fn with_rng(pool: Vec<Arc<PhraseEntry>>, config: BingoConfig, rng: StdRng) -> Self {
        let inventory = PowerUpInventory::new(*config.allotment());
        let remaining_secs = *config.duration_secs();
        Self {
            pool,
            config,
            rng,
            board: None,
            selection: SelectionSet::new(),
            history: Vec::new(),
            inventory,
            remaining_secs,
            games_won: 0,
            current_streak: 0,
            phase: Phase::Idle,
            winning_line: None,
            generation: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Commands
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Applies a command and reports the resulting transition.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`new_game`](Self::new_game) and
    /// [`select_cell`](Self::select_cell).
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply(&mut self, command: Command) -> Result<Transition, BingoError> {
        match command {
            Command::NewGame(size) => self.new_game(size).map(Transition::Started),
            Command::Select(coord) => self.select_cell(coord).map(Transition::Selected),
            Command::UsePowerUp(kind) => Ok(Transition::PowerUp(self.use_power_up(kind))),
        }
    }

    /// Starts a new round on a freshly generated board.
    ///
    /// Clears the selection, history and winning line, refills the timer
    /// and power-ups. Wins and streak carry over.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InsufficientPool`] if the pool cannot fill the
    /// board. The session is left exactly as it was.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn new_game(&mut self, size: BoardSize) -> Result<TimerToken, BingoError> {
        let board = generate_board(&self.pool, size, &mut self.rng)?;

        self.generation += 1;
        self.board = Some(board);
        self.selection.clear();
        self.history.clear();
        self.winning_line = None;
        self.remaining_secs = *self.config.duration_secs();
        self.inventory = PowerUpInventory::new(*self.config.allotment());
        self.phase = Phase::Playing;

        assert_invariants(self);
        info!(
            %size,
            generation = self.generation,
            duration_secs = self.remaining_secs,
            "New game started"
        );
        Ok(TimerToken(self.generation))
    }

    /// Marks a cell and checks for a completed line.
    ///
    /// Marking an already-marked cell or the free space, or marking
    /// outside a running round, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InvalidCoordinate`] if the coordinate is off
    /// the board. No state changes in that case.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn select_cell(&mut self, coord: Coord) -> Result<SelectOutcome, BingoError> {
        if self.phase != Phase::Playing {
            debug!("Selection ignored outside a running round");
            return Ok(SelectOutcome::Ignored);
        }

        SelectContract::pre(self, &coord)?;

        if self.is_marked(coord) {
            debug!("Cell already marked");
            return Ok(SelectOutcome::Ignored);
        }

        #[cfg(debug_assertions)]
        let before = self.selection.clone();

        let outcome = self.mark(coord);

        #[cfg(debug_assertions)]
        SelectContract::check_after(&before, self)?;

        Ok(outcome)
    }

    /// Spends one charge of a power-up and applies its effect.
    ///
    /// Undo on an empty history and auto-mark with no unmarked cell left
    /// still consume the charge.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn use_power_up(&mut self, kind: PowerUp) -> PowerUpOutcome {
        if self.phase != Phase::Playing {
            debug!("Power-up ignored outside a running round");
            return PowerUpOutcome::Unavailable;
        }
        if !self.inventory.consume(kind) {
            return PowerUpOutcome::Unavailable;
        }

        let outcome = match kind {
            PowerUp::Undo => PowerUpOutcome::Undone(self.undo()),
            PowerUp::AutoMark => self.auto_mark(),
            PowerUp::Hint => PowerUpOutcome::Hint(self.hint()),
        };

        assert_invariants(self);
        info!(%kind, remaining = self.inventory.remaining(kind), ?outcome, "Power-up used");
        outcome
    }

    /// Advances the countdown by one second.
    ///
    /// Ticks are ignored outside a running round or when `token` belongs
    /// to an earlier round.
    #[instrument(skip(self), fields(phase = %self.phase, remaining = self.remaining_secs))]
    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        if self.phase != Phase::Playing || token != TimerToken(self.generation) {
            debug!(?token, generation = self.generation, "Stale or idle tick dropped");
            return TickOutcome::Ignored;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TickOutcome::Running(self.remaining_secs);
        }

        self.phase = Phase::TimedOut;
        self.current_streak = 0;
        info!(games_won = self.games_won, "Round timed out");
        TickOutcome::TimedOut
    }
}

// ─────────────────────────────────────────────────────────────
//  Command internals
// ─────────────────────────────────────────────────────────────

impl GameSession {
    fn is_marked(&self, coord: Coord) -> bool {
        self.selection.contains(&coord) || self.board.as_ref().is_some_and(|b| b.is_free(coord))
    }

    /// Records the mark and settles a win. Caller validates the cell.
    fn mark(&mut self, coord: Coord) -> SelectOutcome {
        self.selection.insert(coord);
        self.history.push(coord);

        let line = self
            .board
            .as_ref()
            .and_then(|board| check_win(board, &self.selection));

        match line {
            Some(line) => {
                self.phase = Phase::Won;
                self.games_won += 1;
                self.current_streak += 1;
                self.winning_line = Some(line.clone());
                info!(
                    %coord,
                    line = %line,
                    games_won = self.games_won,
                    streak = self.current_streak,
                    "Bingo"
                );
                SelectOutcome::Won(line)
            }
            None => {
                debug!(%coord, marked = self.selection.len(), "Cell marked");
                SelectOutcome::Marked
            }
        }
    }

    fn undo(&mut self) -> Option<Coord> {
        let coord = self.history.pop()?;
        self.selection.remove(&coord);
        debug!(%coord, "Mark undone");
        Some(coord)
    }

    fn auto_mark(&mut self) -> PowerUpOutcome {
        let candidates: Vec<Coord> = match &self.board {
            Some(board) => board
                .coords()
                .filter(|coord| !self.is_marked(*coord))
                .collect(),
            None => Vec::new(),
        };

        match candidates.choose(&mut self.rng).copied() {
            Some(coord) => PowerUpOutcome::AutoMarked {
                cell: Some(coord),
                outcome: self.mark(coord),
            },
            None => {
                debug!("No unmarked cell left to auto-mark");
                PowerUpOutcome::AutoMarked {
                    cell: None,
                    outcome: SelectOutcome::Ignored,
                }
            }
        }
    }

    fn hint(&self) -> Option<Coord> {
        self.board
            .as_ref()
            .and_then(|board| find_winning_move(board, &self.selection))
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Returns the current board, if a game has been started.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Returns the marked cells (free space excluded).
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the marks in the order they were made.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Returns the power-up inventory.
    pub fn inventory(&self) -> &PowerUpInventory {
        &self.inventory
    }

    /// Seconds left on the clock.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Rounds won across this session.
    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Consecutive wins since the last timeout.
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the line that won the round, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Token for ticks of the running round; `None` outside `Playing`.
    pub fn timer_token(&self) -> Option<TimerToken> {
        (self.phase == Phase::Playing).then_some(TimerToken(self.generation))
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &BingoConfig {
        &self.config
    }

    /// Number of phrases available to draw from.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Score of the current round.
    pub fn score(&self) -> u32 {
        match &self.board {
            Some(board) => scoring::score(board, &self.selection, self.phase == Phase::Won),
            None => 0,
        }
    }

    /// Rank label for the current score.
    pub fn rank(&self) -> ScoreRank {
        ScoreRank::for_score(self.score())
    }
}
