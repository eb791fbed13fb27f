//! Tests for hint, undo and auto-mark power-ups.

use jargon_bingo::{
    Allotment, BingoConfig, BoardSize, Coord, GameSession, Phase, PhraseEntry, PowerUp,
    PowerUpOutcome, SelectOutcome,
};
use std::sync::Arc;

fn pool() -> Vec<Arc<PhraseEntry>> {
    (1..=12)
        .map(|i| {
            Arc::new(PhraseEntry::new(
                format!("Move the needle {i}"),
                format!("Make progress {i}"),
                "Strategy".to_string(),
                i,
            ))
        })
        .collect()
}

fn playing() -> GameSession {
    let mut session = GameSession::with_seed(pool(), BingoConfig::default(), 9);
    session.new_game(BoardSize::Three).unwrap();
    session
}

#[test]
fn test_undo_on_empty_history_spends_charge() {
    let mut session = playing();
    assert_eq!(session.use_power_up(PowerUp::Undo), PowerUpOutcome::Undone(None));

    let inventory = session.inventory();
    assert_eq!(inventory.remaining(PowerUp::Undo), 2);
    assert_eq!(inventory.remaining(PowerUp::Hint), 3);
    assert_eq!(inventory.remaining(PowerUp::AutoMark), 2);
    assert!(session.selection().is_empty());
}

#[test]
fn test_undo_is_lifo() {
    let mut session = playing();
    session.select_cell(Coord::new(0, 0)).unwrap();
    session.select_cell(Coord::new(2, 1)).unwrap();

    assert_eq!(
        session.use_power_up(PowerUp::Undo),
        PowerUpOutcome::Undone(Some(Coord::new(2, 1)))
    );
    assert_eq!(
        session.use_power_up(PowerUp::Undo),
        PowerUpOutcome::Undone(Some(Coord::new(0, 0)))
    );
    assert!(session.selection().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn test_undone_cell_can_be_marked_again() {
    let mut session = playing();
    session.select_cell(Coord::new(0, 2)).unwrap();
    session.use_power_up(PowerUp::Undo);
    assert_eq!(
        session.select_cell(Coord::new(0, 2)),
        Ok(SelectOutcome::Marked)
    );
}

#[test]
fn test_exhausted_power_up_is_unavailable() {
    let mut session = playing();
    for _ in 0..3 {
        assert_ne!(session.use_power_up(PowerUp::Undo), PowerUpOutcome::Unavailable);
    }
    assert_eq!(session.use_power_up(PowerUp::Undo), PowerUpOutcome::Unavailable);
    assert_eq!(session.inventory().remaining(PowerUp::Undo), 0);
    assert!(!session.inventory().is_available(PowerUp::Undo));
}

#[test]
fn test_hint_points_at_winning_cell_without_marking() {
    let mut session = playing();
    session.select_cell(Coord::new(0, 0)).unwrap();
    session.select_cell(Coord::new(0, 1)).unwrap();

    assert_eq!(
        session.use_power_up(PowerUp::Hint),
        PowerUpOutcome::Hint(Some(Coord::new(0, 2)))
    );
    assert_eq!(session.selection().len(), 2);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.inventory().remaining(PowerUp::Hint), 2);
}

#[test]
fn test_hint_uses_free_space() {
    let mut session = playing();
    session.select_cell(Coord::new(1, 0)).unwrap();

    assert_eq!(
        session.use_power_up(PowerUp::Hint),
        PowerUpOutcome::Hint(Some(Coord::new(1, 2)))
    );
}

#[test]
fn test_hint_with_nothing_close_still_spends_charge() {
    let mut session = playing();
    assert_eq!(session.use_power_up(PowerUp::Hint), PowerUpOutcome::Hint(None));
    assert_eq!(session.inventory().remaining(PowerUp::Hint), 2);
}

#[test]
fn test_auto_mark_marks_unmarked_cell() {
    let mut session = playing();

    let PowerUpOutcome::AutoMarked {
        cell: Some(cell),
        outcome,
    } = session.use_power_up(PowerUp::AutoMark)
    else {
        panic!("Expected an auto-marked cell");
    };

    assert_ne!(cell, Coord::new(1, 1));
    assert_eq!(outcome, SelectOutcome::Marked);
    assert!(session.selection().contains(&cell));
    assert_eq!(session.history().last(), Some(&cell));
}

#[test]
fn test_auto_mark_can_win() {
    let config = BingoConfig::default().with_allotment(Allotment::new(0, 0, 8));
    let mut session = GameSession::with_seed(pool(), config, 3);
    session.new_game(BoardSize::Three).unwrap();

    // A full 3x3 board always holds a line, so eight charges are enough.
    let mut last = None;
    for _ in 0..8 {
        if session.phase() != Phase::Playing {
            break;
        }
        last = Some(session.use_power_up(PowerUp::AutoMark));
    }

    assert!(matches!(
        last,
        Some(PowerUpOutcome::AutoMarked {
            cell: Some(_),
            outcome: SelectOutcome::Won(_),
        })
    ));
    assert_eq!(session.games_won(), 1);
}

#[test]
fn test_auto_mark_then_undo_restores_selection() {
    let mut session = playing();
    let PowerUpOutcome::AutoMarked {
        cell: Some(cell), ..
    } = session.use_power_up(PowerUp::AutoMark)
    else {
        panic!("Expected an auto-marked cell");
    };

    assert_eq!(
        session.use_power_up(PowerUp::Undo),
        PowerUpOutcome::Undone(Some(cell))
    );
    assert!(session.selection().is_empty());
}
