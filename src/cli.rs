//! Command-line interface for jargon_bingo.

use clap::{Parser, Subcommand};
use jargon_bingo::{BoardSize, FavoriteSort, PhraseSort};
use std::path::PathBuf;

/// Jargon Bingo - mark the buzzwords before the meeting ends
#[derive(Parser, Debug)]
#[command(name = "jargon_bingo")]
#[command(about = "Corporate jargon bingo in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Path to the game config file (defaults used if missing)
        #[arg(short, long, default_value = "jargon_bingo.toml")]
        config: PathBuf,

        /// Phrase catalog JSON file (built-in catalog if not provided)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Board size for the first round: 3 or 4
        #[arg(short, long)]
        size: Option<BoardSize>,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,

        /// Only draw phrases from this category
        #[arg(long)]
        category: Option<String>,

        /// Lowest complexity level to draw
        #[arg(long)]
        min_level: Option<u8>,

        /// Highest complexity level to draw
        #[arg(long)]
        max_level: Option<u8>,
    },

    /// Browse the phrase catalog
    Phrases {
        /// Phrase catalog JSON file (built-in catalog if not provided)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Case-insensitive text to search in phrases and translations
        #[arg(long)]
        search: Option<String>,

        /// Only list this category
        #[arg(long)]
        category: Option<String>,

        /// Sort order: alphabetical, complexity or category
        #[arg(long, default_value = "alphabetical")]
        sort: PhraseSort,
    },
    /// Star phrases and list the favorites
    Favorites {
        /// Phrase catalog JSON file (built-in catalog if not provided)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Exact phrase text to toggle; repeat to toggle several
        #[arg(short, long = "phrase")]
        phrases: Vec<String>,

        /// Case-insensitive text to search in phrases and translations
        #[arg(long)]
        search: Option<String>,

        /// Only list this category
        #[arg(long)]
        category: Option<String>,

        /// Only list this exact complexity level
        #[arg(long)]
        level: Option<u8>,

        /// Sort order: newest, complexity or alphabetical
        #[arg(long, default_value = "newest")]
        sort: FavoriteSort,
    },

    /// Page through the most non-sensical phrases
    Collection {
        /// Phrase catalog JSON file (built-in catalog if not provided)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show how many phrases each category holds
    Categories {
        /// Phrase catalog JSON file (built-in catalog if not provided)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}
