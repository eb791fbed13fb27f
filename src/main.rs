//! Jargon Bingo - Unified CLI
//!
//! Interactive buzzword bingo and a phrase catalog browser.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use jargon_bingo::{
    BingoConfig, BoardSize, Driver, FavoriteSort, Favorites, GameSession, MAX_COMPLEXITY,
    MIN_COMPLEXITY, PhraseCatalog, PhraseEntry, PhraseFilter, PhraseSort, TracingNotifier,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            catalog,
            size,
            seed,
            category,
            min_level,
            max_level,
        } => {
            let filter = build_filter(category, min_level, max_level);
            run_play(config, catalog, size, seed, filter).await
        }
        Command::Phrases {
            catalog,
            search,
            category,
            sort,
        } => {
            let mut filter = PhraseFilter::new();
            if let Some(search) = search {
                filter = filter.with_search(search);
            }
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            run_phrases(catalog, filter, sort)
        }
        Command::Favorites {
            catalog,
            phrases,
            search,
            category,
            level,
            sort,
        } => {
            let mut filter = PhraseFilter::new();
            if let Some(search) = search {
                filter = filter.with_search(search);
            }
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(level) = level {
                filter = filter.with_level(level);
            }
            run_favorites(catalog, phrases, filter, sort)
        }
        Command::Collection { catalog, page } => run_collection(catalog, page),
        Command::Categories { catalog } => run_categories(catalog),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_filter(
    category: Option<String>,
    min_level: Option<u8>,
    max_level: Option<u8>,
) -> PhraseFilter {
    let mut filter = PhraseFilter::new().with_complexity(
        min_level.unwrap_or(MIN_COMPLEXITY)..=max_level.unwrap_or(MAX_COMPLEXITY),
    );
    if let Some(category) = category {
        filter = filter.with_category(category);
    }
    filter
}

#[instrument]
fn load_catalog(path: Option<&Path>) -> Result<PhraseCatalog> {
    let catalog = match path {
        Some(path) => PhraseCatalog::from_file(path)?,
        None => PhraseCatalog::builtin()?,
    };
    Ok(catalog)
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config.display()))]
async fn run_play(
    config: PathBuf,
    catalog: Option<PathBuf>,
    size: Option<BoardSize>,
    seed: Option<u64>,
    filter: PhraseFilter,
) -> Result<()> {
    let mut config = BingoConfig::load_or_default(&config)?;
    if let Some(size) = size {
        config = config.with_default_size(size);
    }

    let catalog = load_catalog(catalog.as_deref())?;
    let pool = catalog.pool(&filter);
    info!(pool_size = pool.len(), "Phrase pool ready");

    let mut session = match seed {
        Some(seed) => GameSession::with_seed(pool, config, seed),
        None => GameSession::new(pool, config),
    };
    let first_size = *session.config().default_size();
    session
        .new_game(first_size)
        .context("Not enough phrases match the filter to fill a board")?;

    let driver = Driver::new(session, TracingNotifier, std::io::stdout());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let session = driver.run(stdin).await?;

    println!(
        "Thanks for playing! Won {} round(s), current streak {}.",
        session.games_won(),
        session.current_streak()
    );
    Ok(())
}

/// Print the catalog, filtered and sorted
#[instrument(skip(filter))]
fn run_phrases(catalog: Option<PathBuf>, filter: PhraseFilter, sort: PhraseSort) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let entries = catalog.list(&filter, sort);

    let mut out = std::io::stdout().lock();
    for entry in &entries {
        write_entry(&mut out, entry)?;
    }
    writeln!(out, "{} of {} phrases", entries.len(), catalog.len())?;
    Ok(())
}

/// Toggle the named phrases, then print the favorites
#[instrument(skip(filter))]
fn run_favorites(
    catalog: Option<PathBuf>,
    phrases: Vec<String>,
    filter: PhraseFilter,
    sort: FavoriteSort,
) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let mut favorites = Favorites::new();
    for phrase in &phrases {
        let entry = catalog
            .find(phrase)
            .with_context(|| format!("No phrase {phrase:?} in the catalog"))?;
        favorites.toggle(entry.clone());
    }

    let entries = favorites.list(&filter, sort);
    let mut out = std::io::stdout().lock();
    for entry in &entries {
        write_entry(&mut out, entry)?;
    }
    writeln!(out, "{} of {} favorites", entries.len(), favorites.len())?;
    Ok(())
}

/// Print one page of the curated collection
#[instrument]
fn run_collection(catalog: Option<PathBuf>, page: usize) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let page = catalog.collection(page);

    let mut out = std::io::stdout().lock();
    for entry in page.entries() {
        write_entry(&mut out, entry)?;
    }
    writeln!(
        out,
        "Page {} of {} ({} phrases)",
        page.page(),
        page.total_pages(),
        page.total()
    )?;
    Ok(())
}

/// Print the phrase count per category
#[instrument]
fn run_categories(catalog: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let mut out = std::io::stdout().lock();
    for (category, count) in catalog.category_counts() {
        writeln!(out, "{category}: {count}")?;
    }
    Ok(())
}

fn write_entry(out: &mut impl Write, entry: &PhraseEntry) -> std::io::Result<()> {
    writeln!(
        out,
        "{} [{}, level {} - {}]\n    {}",
        entry.phrase(),
        entry.category(),
        entry.complexity_level(),
        entry.tier(),
        entry.translation()
    )
}
