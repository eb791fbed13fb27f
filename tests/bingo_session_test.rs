//! Tests for the jargon bingo session state machine.

use jargon_bingo::{
    Allotment, BingoConfig, BingoError, BoardSize, Coord, GameSession, LineKind, Phase,
    PhraseEntry, PowerUp, PowerUpOutcome, SelectOutcome, TickOutcome, WinningLine, WIN_BONUS,
};
use std::sync::Arc;

fn pool(count: usize, level: u8) -> Vec<Arc<PhraseEntry>> {
    (0..count)
        .map(|i| {
            Arc::new(PhraseEntry::new(
                format!("Circle back on item {i}"),
                format!("Talk about item {i} later"),
                "Meetings".to_string(),
                level,
            ))
        })
        .collect()
}

fn session_with(config: BingoConfig) -> GameSession {
    GameSession::with_seed(pool(24, 5), config, 42)
}

fn playing(size: BoardSize) -> GameSession {
    let mut session = session_with(BingoConfig::default());
    session.new_game(size).unwrap();
    session
}

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_new_game_starts_playing() {
    let session = playing(BoardSize::Three);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.remaining_secs(), 180);
    assert!(session.selection().is_empty());
    assert!(session.timer_token().is_some());

    let board = session.board().unwrap();
    assert_eq!(board.side(), 3);
    assert!(board.is_free(c(1, 1)));
    assert_eq!(session.inventory().remaining(PowerUp::Hint), 3);
    assert_eq!(session.inventory().remaining(PowerUp::Undo), 3);
    assert_eq!(session.inventory().remaining(PowerUp::AutoMark), 2);
}

#[test]
fn test_top_row_wins() {
    let mut session = playing(BoardSize::Three);
    assert_eq!(session.select_cell(c(0, 0)), Ok(SelectOutcome::Marked));
    assert_eq!(session.select_cell(c(0, 1)), Ok(SelectOutcome::Marked));

    let expected = WinningLine::new(LineKind::Row, vec![c(0, 0), c(0, 1), c(0, 2)]);
    assert_eq!(
        session.select_cell(c(0, 2)),
        Ok(SelectOutcome::Won(expected.clone()))
    );
    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.winning_line(), Some(&expected));
    assert_eq!(session.games_won(), 1);
    assert_eq!(session.current_streak(), 1);
    assert_eq!(session.score(), 3 * 5 * 2 + WIN_BONUS);
    assert!(session.timer_token().is_none());
}

#[test]
fn test_diagonal_through_free_space_wins() {
    let mut session = playing(BoardSize::Three);
    session.select_cell(c(0, 0)).unwrap();
    let outcome = session.select_cell(c(2, 2)).unwrap();

    assert_eq!(
        outcome,
        SelectOutcome::Won(WinningLine::new(
            LineKind::Diagonal,
            vec![c(0, 0), c(1, 1), c(2, 2)]
        ))
    );
}

#[test]
fn test_four_by_four_needs_four_cells() {
    let mut session = playing(BoardSize::Four);
    for col in 0..3 {
        assert_eq!(session.select_cell(c(3, col)), Ok(SelectOutcome::Marked));
    }
    assert!(matches!(
        session.select_cell(c(3, 3)),
        Ok(SelectOutcome::Won(_))
    ));
}

#[test]
fn test_reselect_is_idempotent() {
    let mut session = playing(BoardSize::Three);
    session.select_cell(c(2, 0)).unwrap();
    let before = session.selection().clone();

    assert_eq!(session.select_cell(c(2, 0)), Ok(SelectOutcome::Ignored));
    assert_eq!(session.selection(), &before);
    assert_eq!(session.history(), &[c(2, 0)]);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut session = playing(BoardSize::Three);
    assert_eq!(
        session.select_cell(c(3, 0)),
        Err(BingoError::InvalidCoordinate {
            coord: c(3, 0),
            side: 3
        })
    );
    assert!(session.selection().is_empty());
}

#[test]
fn test_terminal_phase_locks_round() {
    let mut session = playing(BoardSize::Three);
    let token = session.timer_token().unwrap();
    for col in 0..3 {
        session.select_cell(c(0, col)).unwrap();
    }
    let score = session.score();

    assert_eq!(session.select_cell(c(2, 0)), Ok(SelectOutcome::Ignored));
    assert_eq!(session.use_power_up(PowerUp::Undo), PowerUpOutcome::Unavailable);
    assert_eq!(session.tick(token), TickOutcome::Ignored);
    assert_eq!(session.score(), score);
    assert_eq!(session.inventory().remaining(PowerUp::Undo), 3);
}

#[test]
fn test_timeout_resets_streak_keeps_wins() {
    let config = BingoConfig::default().with_duration_secs(2);
    let mut session = session_with(config);

    session.new_game(BoardSize::Three).unwrap();
    for col in 0..3 {
        session.select_cell(c(0, col)).unwrap();
    }
    assert_eq!(session.current_streak(), 1);

    let token = session.new_game(BoardSize::Three).unwrap();
    assert_eq!(session.remaining_secs(), 2);
    assert_eq!(session.tick(token), TickOutcome::Running(1));
    assert_eq!(session.tick(token), TickOutcome::TimedOut);

    assert_eq!(session.phase(), Phase::TimedOut);
    assert_eq!(session.remaining_secs(), 0);
    assert_eq!(session.games_won(), 1);
    assert_eq!(session.current_streak(), 0);
    assert_eq!(session.select_cell(c(0, 0)), Ok(SelectOutcome::Ignored));
    let inventory = session.inventory().clone();
    for kind in [PowerUp::AutoMark, PowerUp::Hint, PowerUp::Undo] {
        assert_eq!(session.use_power_up(kind), PowerUpOutcome::Unavailable);
    }
    assert_eq!(session.inventory(), &inventory);
    assert!(session.selection().is_empty());
    assert_eq!(session.tick(token), TickOutcome::Ignored);
}

#[test]
fn test_stale_tick_dropped_after_restart() {
    let mut session = session_with(BingoConfig::default().with_duration_secs(10));
    let old = session.new_game(BoardSize::Three).unwrap();
    let new = session.new_game(BoardSize::Three).unwrap();
    assert_ne!(old, new);

    assert_eq!(session.tick(old), TickOutcome::Ignored);
    assert_eq!(session.remaining_secs(), 10);
    assert_eq!(session.tick(new), TickOutcome::Running(9));
}

#[test]
fn test_new_game_keeps_totals_and_refills() {
    let mut session = playing(BoardSize::Three);
    session.use_power_up(PowerUp::Hint);
    for col in 0..3 {
        session.select_cell(c(0, col)).unwrap();
    }

    session.new_game(BoardSize::Four).unwrap();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.board().unwrap().side(), 4);
    assert!(session.selection().is_empty());
    assert!(session.history().is_empty());
    assert!(session.winning_line().is_none());
    assert_eq!(session.inventory().remaining(PowerUp::Hint), 3);
    assert_eq!(session.games_won(), 1);
    assert_eq!(session.current_streak(), 1);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_insufficient_pool() {
    let mut session = GameSession::with_seed(pool(7, 3), BingoConfig::default(), 1);
    assert_eq!(
        session.new_game(BoardSize::Three),
        Err(BingoError::InsufficientPool {
            required: 8,
            available: 7
        })
    );
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.board().is_none());
}

#[test]
fn test_duplicate_phrases_count_once() {
    let mut phrases = pool(7, 3);
    phrases.push(Arc::clone(&phrases[0]));
    phrases.push(Arc::new(PhraseEntry::new(
        "Circle back on item 1".to_string(),
        "Same words, different meaning".to_string(),
        "Strategy".to_string(),
        9,
    )));

    let mut session = GameSession::with_seed(phrases, BingoConfig::default(), 1);
    assert!(matches!(
        session.new_game(BoardSize::Three),
        Err(BingoError::InsufficientPool { available: 7, .. })
    ));
}

#[test]
fn test_boards_have_distinct_phrases() {
    let mut session = session_with(BingoConfig::default());
    for _ in 0..10 {
        session.new_game(BoardSize::Four).unwrap();
        let board = session.board().unwrap();
        let mut texts: Vec<&str> = board
            .coords()
            .filter_map(|coord| board.get(coord))
            .filter_map(|cell| cell.phrase())
            .map(|entry| entry.phrase().as_str())
            .collect();
        assert_eq!(texts.len(), 16);
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 16);
    }
}

#[test]
fn test_same_seed_same_board() {
    let mut first = session_with(BingoConfig::default());
    let mut second = session_with(BingoConfig::default());
    first.new_game(BoardSize::Four).unwrap();
    second.new_game(BoardSize::Four).unwrap();
    assert_eq!(first.board(), second.board());
}

#[test]
fn test_custom_allotment_applies_each_round() {
    let config = BingoConfig::default().with_allotment(Allotment::new(0, 1, 5));
    let mut session = session_with(config);
    session.new_game(BoardSize::Three).unwrap();

    assert_eq!(session.use_power_up(PowerUp::Hint), PowerUpOutcome::Unavailable);
    assert_eq!(session.inventory().remaining(PowerUp::AutoMark), 5);
}
