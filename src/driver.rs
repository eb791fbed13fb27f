//! Terminal driver: feeds typed commands and one-second ticks into a
//! [`GameSession`] and renders the result as text.
//!
//! The driver runs on a single task. Commands and ticks are handled one
//! at a time, so the session is never touched concurrently.

use crate::games::bingo::{
    BingoError, Board, BoardSize, Command, Coord, GameSession, PowerUp, PowerUpOutcome,
    SelectOutcome, TickOutcome, TimerToken, Transition, WinningLine,
};
use derive_more::{Display, Error};
use std::io::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, info, instrument, warn};

/// Receives fire-and-forget notifications after state transitions.
///
/// Methods cannot fail; whatever a notifier does (sound, confetti, toasts)
/// has no effect on the session.
pub trait Notifier {
    /// A new round started on `board`.
    fn game_started(&mut self, _board: &Board) {}

    /// The round was won.
    fn won(&mut self, _line: &WinningLine, _score: u32) {}

    /// The timer ran out.
    fn timed_out(&mut self, _games_won: u32) {}

    /// A power-up charge was spent.
    fn power_up_used(&mut self, _kind: PowerUp, _outcome: &PowerUpOutcome) {}
}

/// Notifier that records events in the trace log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn game_started(&mut self, board: &Board) {
        info!(size = %board.size(), "🎮 Game started");
    }

    fn won(&mut self, line: &WinningLine, score: u32) {
        info!(%line, score, "🎉 Bingo!");
    }

    fn timed_out(&mut self, games_won: u32) {
        info!(games_won, "⏰ Time's up");
    }

    fn power_up_used(&mut self, kind: PowerUp, outcome: &PowerUpOutcome) {
        info!(%kind, ?outcome, "Power-up used");
    }
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Start a new round; `None` uses the configured size.
    NewGame(Option<BoardSize>),
    /// A session command.
    Command(Command),
    /// Print the board and status.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct InputError {
    /// What went wrong.
    pub message: String,
}

impl InputError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(InputError::new("Empty command"));
        };
        let args: Vec<&str> = words.collect();

        match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("new" | "n", []) => Ok(Input::NewGame(None)),
            ("new" | "n", [size]) => size
                .parse::<BoardSize>()
                .map(|size| Input::NewGame(Some(size)))
                .map_err(|_| InputError::new(format!("Unknown board size {size:?}, use 3 or 4"))),
            ("mark" | "m", [row, col]) => {
                let row = row
                    .parse()
                    .map_err(|_| InputError::new(format!("Row {row:?} is not a number")))?;
                let col = col
                    .parse()
                    .map_err(|_| InputError::new(format!("Column {col:?} is not a number")))?;
                Ok(Input::Command(Command::Select(Coord::new(row, col))))
            }
            ("board" | "b", []) => Ok(Input::Show),
            ("help" | "?", []) => Ok(Input::Help),
            ("quit" | "q" | "exit", []) => Ok(Input::Quit),
            (other, []) => other
                .parse::<PowerUp>()
                .map(|kind| Input::Command(Command::UsePowerUp(kind)))
                .map_err(|_| InputError::new(format!("Unknown command {other:?}, try help"))),
            (other, _) => Err(InputError::new(format!(
                "Wrong arguments for {other:?}, try help"
            ))),
        }
    }
}

/// What the event loop should do after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// A new round started; the tick schedule must restart.
    TimerRestarted,
    /// Stop the loop.
    Quit,
}

const HELP: &str = "\
Commands:
  new [3|4]        start a new round
  mark <row> <col> mark a cell (zero-based)
  hint             show a cell that would win
  undo             unmark the last cell
  auto             mark a random cell
  board            show the board
  quit             leave
";

/// Drives a session from text input and timer ticks.
#[derive(Debug)]
pub struct Driver<N, W> {
    session: GameSession,
    notifier: N,
    out: W,
    timer: Option<TimerToken>,
}

impl<N: Notifier, W: Write> Driver<N, W> {
    /// Creates a driver around an existing session.
    pub fn new(session: GameSession, notifier: N, out: W) -> Self {
        let timer = session.timer_token();
        Self {
            session,
            notifier,
            out,
            timer,
        }
    }

    /// Returns the driven session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Checks if a round's countdown is live.
    pub fn timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Consumes the driver, returning the session.
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Handles one line of player input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> std::io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                debug!(error = %e, "Unparsed input");
                writeln!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        match input {
            Input::Quit => Ok(Flow::Quit),
            Input::Help => {
                write!(self.out, "{HELP}")?;
                Ok(Flow::Continue)
            }
            Input::Show => {
                self.render()?;
                Ok(Flow::Continue)
            }
            Input::NewGame(size) => {
                let size = size.unwrap_or(*self.session.config().default_size());
                self.execute(Command::NewGame(size))
            }
            Input::Command(command) => self.execute(command),
        }
    }

    /// Applies a command, notifies, and renders the result.
    fn execute(&mut self, command: Command) -> std::io::Result<Flow> {
        let transition = match self.session.apply(command) {
            Ok(transition) => transition,
            Err(e @ BingoError::InvalidCoordinate { .. }) => {
                writeln!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                warn!(error = %e, %command, "Command failed");
                writeln!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        match transition {
            Transition::Started(token) => {
                // Swap the token before anything else so no tick of the
                // previous round can land on this one.
                self.timer = Some(token);
                if let Some(board) = self.session.board() {
                    self.notifier.game_started(board);
                }
                self.render()?;
                Ok(Flow::TimerRestarted)
            }
            Transition::Selected(outcome) => {
                self.report_selection(&outcome)?;
                Ok(Flow::Continue)
            }
            Transition::PowerUp(outcome) => {
                if let Command::UsePowerUp(kind) = command {
                    self.report_power_up(kind, &outcome)?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn report_selection(&mut self, outcome: &SelectOutcome) -> std::io::Result<()> {
        match outcome {
            SelectOutcome::Ignored => writeln!(self.out, "Nothing to mark there."),
            SelectOutcome::Marked => self.render(),
            SelectOutcome::Won(line) => {
                self.timer = None;
                self.notifier.won(line, self.session.score());
                writeln!(self.out, "BINGO! Completed {line}")?;
                self.render()
            }
        }
    }

    fn report_power_up(&mut self, kind: PowerUp, outcome: &PowerUpOutcome) -> std::io::Result<()> {
        if *outcome != PowerUpOutcome::Unavailable {
            self.notifier.power_up_used(kind, outcome);
        }

        match outcome {
            PowerUpOutcome::Unavailable => writeln!(self.out, "{kind} is not available."),
            PowerUpOutcome::Undone(Some(coord)) => {
                writeln!(self.out, "Unmarked {coord}.")?;
                self.render()
            }
            PowerUpOutcome::Undone(None) => writeln!(self.out, "Nothing to undo."),
            PowerUpOutcome::AutoMarked { cell: None, .. } => {
                writeln!(self.out, "No cell left to auto-mark.")
            }
            PowerUpOutcome::AutoMarked {
                cell: Some(coord),
                outcome,
            } => {
                writeln!(self.out, "Auto-marked {coord}.")?;
                self.report_selection(outcome)
            }
            PowerUpOutcome::Hint(Some(coord)) => writeln!(self.out, "Hint: try {coord}."),
            PowerUpOutcome::Hint(None) => writeln!(self.out, "Hint: no single mark wins yet."),
        }
    }

    /// Feeds one elapsed second into the session.
    #[instrument(skip(self))]
    pub fn handle_tick(&mut self) -> std::io::Result<()> {
        let Some(token) = self.timer else {
            return Ok(());
        };

        match self.session.tick(token) {
            TickOutcome::Ignored => {
                self.timer = None;
                Ok(())
            }
            TickOutcome::Running(left) => {
                if left % 30 == 0 || left <= 10 {
                    writeln!(self.out, "{left}s left")?;
                }
                Ok(())
            }
            TickOutcome::TimedOut => {
                self.timer = None;
                self.notifier.timed_out(self.session.games_won());
                writeln!(self.out, "Time's up! Streak reset.")?;
                self.render()
            }
        }
    }

    /// Prints the board and status line.
    pub fn render(&mut self) -> std::io::Result<()> {
        let session = &self.session;
        let Some(board) = session.board() else {
            return writeln!(self.out, "No game yet. Type `new` to start.");
        };

        write!(self.out, "{}", board.display(session.selection()))?;

        let power_ups = PowerUp::iter()
            .map(|kind| format!("{kind} {}", session.inventory().remaining(kind)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            self.out,
            "{} | {}s left | score {} ({}) | wins {} streak {} | {}",
            session.phase(),
            session.remaining_secs(),
            session.score(),
            session.rank(),
            session.games_won(),
            session.current_streak(),
            power_ups
        )?;

        if session.phase().is_terminal() {
            writeln!(self.out, "Type `new` to play again.")?;
        }
        Ok(())
    }

    /// Runs the event loop until `quit` or end of input.
    ///
    /// Ticks are delivered once per second while a round is running. The
    /// tick schedule restarts whenever a new round begins.
    #[instrument(skip_all)]
    pub async fn run<R>(mut self, input: R) -> anyhow::Result<GameSession>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.reset();

        writeln!(self.out, "Jargon Bingo. Type `help` for commands.")?;
        self.render()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    match self.handle_line(&line)? {
                        Flow::Continue => {}
                        Flow::TimerRestarted => ticker.reset(),
                        Flow::Quit => break,
                    }
                }
                _ = ticker.tick(), if self.timer.is_some() => {
                    self.handle_tick()?;
                }
            }
            self.out.flush()?;
        }

        info!(
            games_won = self.session.games_won(),
            streak = self.session.current_streak(),
            "Leaving game"
        );
        Ok(self.session)
    }
}
