//! Jargon Bingo library - a corporate buzzword bingo engine
//!
//! Players get a randomly generated board of jargon phrases, mark cells as
//! they hear them, and race a countdown to complete a row, column or
//! diagonal.
//!
//! # Architecture
//!
//! - **Catalog**: phrase entries loaded from JSON, with search and sorting,
//!   favorites and the curated collection
//! - **Games**: board generation, win detection, power-ups and the
//!   session state machine
//! - **Config**: round duration, default size and power-up allotment
//! - **Driver**: terminal event loop feeding commands and timer ticks
//!
//! # Example
//!
//! ```
//! use jargon_bingo::{BingoConfig, BoardSize, Coord, GameSession, PhraseCatalog, PhraseFilter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let catalog = PhraseCatalog::builtin()?;
//! let mut session = GameSession::with_seed(
//!     catalog.pool(&PhraseFilter::default()),
//!     BingoConfig::default(),
//!     7,
//! );
//!
//! session.new_game(BoardSize::Three)?;
//! session.select_cell(Coord::new(0, 0))?;
//! assert_eq!(session.selection().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod driver;
mod games;

// Crate-level exports - Phrase catalog
pub use catalog::{
    COLLECTION_MIN_LEVEL, COLLECTION_PAGE_SIZE, CatalogError, CollectionPage, ComplexityTier,
    FavoriteSort, Favorites, MAX_COMPLEXITY, MIN_COMPLEXITY, PhraseCatalog, PhraseEntry,
    PhraseFilter, PhraseSort,
};

// Crate-level exports - Configuration
pub use config::{BingoConfig, ConfigError};

// Crate-level exports - Terminal driver
pub use driver::{Driver, Flow, Input, InputError, Notifier, TracingNotifier};

// Crate-level exports - Game types
pub use games::bingo::{
    Allotment, BingoError, Board, BoardSize, Cell, Command, Coord, GameSession, LineKind, Phase,
    PowerUp, PowerUpInventory, PowerUpOutcome, ScoreRank, SelectOutcome, SelectionSet,
    TickOutcome, TimerToken, Transition, WinningLine, check_win, find_winning_move,
    generate_board, is_complete, lines, score,
};

// Crate-level exports - Contracts and invariants
pub use games::bingo::{
    BingoInvariants, CellInBounds, Contract, FreeSpaceUnmarkedInvariant, Invariant,
    InvariantSet, InvariantViolation, InventoryBoundedInvariant, SelectContract,
    SelectionGrows, SelectionHistoryInvariant, SelectionInBoundsInvariant, POINTS_PER_LEVEL,
    WIN_BONUS,
};
