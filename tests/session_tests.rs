//! Play session tests - actions, slide highlight, puzzle switching, event log

use tui_slide::config::AppConfig;
use tui_slide::core::{generate_with_seed, PuzzleDate};
use tui_slide::event_log::EventLog;
use tui_slide::session::{SeedSource, Session};
use tui_slide::types::{GameAction, GameStatus, Mode, SLIDE_FLASH_MS};

fn config(seed: Option<u32>, mode: Mode) -> AppConfig {
    AppConfig {
        mode,
        seed,
        ..AppConfig::default()
    }
}

fn log_lines(session: Session<Vec<u8>>) -> Vec<serde_json::Value> {
    let bytes = session.into_log().into_inner().unwrap();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_new_session_generates_and_logs() {
    let session = Session::new(&config(Some(42), Mode::Normal), EventLog::to_writer(Vec::new()));
    assert_eq!(session.source, SeedSource::Fixed(42));
    assert_eq!(session.puzzle, generate_with_seed(42, Mode::Normal));
    assert_eq!(session.state.blocks, session.puzzle.blocks);
    assert_eq!(session.cursor.cell(), (-1, 3));

    let lines = log_lines(session);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["event"], "puzzle_generated");
    assert_eq!(lines[0]["seed"], 42);
    assert_eq!(lines[0]["mode"], "normal");
}

#[test]
fn test_zero_seed_falls_back_to_date() {
    let cfg = AppConfig {
        seed: Some(0),
        date: PuzzleDate::new(2024, 5, 17),
        ..AppConfig::default()
    };
    let session = Session::new(&cfg, EventLog::<Vec<u8>>::disabled());
    assert_eq!(session.puzzle.seed, 20_240_517);
}

#[test]
fn test_cursor_actions_walk_ring() {
    let mut session = Session::new(&config(Some(1), Mode::Normal), EventLog::<Vec<u8>>::disabled());
    session.apply_action(GameAction::CursorNext);
    assert_eq!(session.cursor.cell(), (-1, 4));
    session.apply_action(GameAction::CursorPrev);
    session.apply_action(GameAction::CursorPrev);
    assert_eq!(session.cursor.cell(), (-1, 2));
}

#[test]
fn test_push_flash_blocks_input_until_tick() {
    let mut session = Session::new(&config(Some(42), Mode::Normal), EventLog::<Vec<u8>>::disabled());

    // Walk the ring until a push actually moves something.
    let ring = session.cursor.len();
    let mut moved = false;
    for _ in 0..ring {
        let before = session.state.blocks.clone();
        session.apply_action(GameAction::Push);
        if session.state.blocks != before {
            moved = true;
            break;
        }
        session.apply_action(GameAction::CursorNext);
    }
    assert!(moved, "no edge cell moves any block");
    assert_eq!(session.state.move_count, 1);

    if session.state.game_status == GameStatus::Playing {
        assert!(session.state.is_animating);

        // Pushes are ignored while the slide is highlighted.
        let blocks = session.state.blocks.clone();
        session.apply_action(GameAction::Push);
        assert_eq!(session.state.blocks, blocks);
        assert_eq!(session.state.move_count, 1);

        session.tick(SLIDE_FLASH_MS - 1);
        assert!(session.state.is_animating);
        session.tick(1);
        assert!(!session.state.is_animating);
    }
}

#[test]
fn test_retry_restores_puzzle() {
    let mut session = Session::new(&config(Some(42), Mode::Normal), EventLog::to_writer(Vec::new()));
    session.apply_action(GameAction::Push);
    session.tick(SLIDE_FLASH_MS);
    session.apply_action(GameAction::Retry);

    assert_eq!(session.state.blocks, session.puzzle.blocks);
    assert_eq!(session.state.retry_count, 1);
    assert_eq!(session.state.move_count, 0);
    assert!(!session.state.is_animating);

    let lines = log_lines(session);
    assert_eq!(lines.first().unwrap()["event"], "puzzle_generated");
    let last = lines.last().unwrap();
    assert_eq!(last["event"], "retry");
    assert_eq!(last["retry_count"], 1);
}

#[test]
fn test_push_is_logged() {
    let mut session = Session::new(&config(Some(7), Mode::Hard), EventLog::to_writer(Vec::new()));
    session.apply_action(GameAction::Push);

    let lines = log_lines(session);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["event"], "push");
    assert_eq!(lines[1]["direction"], "down");
    assert_eq!(lines[1]["cell"], serde_json::json!([-1, 4]));
}

#[test]
fn test_switch_mode_regenerates() {
    let mut session = Session::new(&config(Some(42), Mode::Normal), EventLog::to_writer(Vec::new()));
    session.apply_action(GameAction::SwitchMode);

    assert_eq!(session.mode, Mode::Hard);
    assert_eq!(session.state.mode, Mode::Hard);
    assert_eq!(session.puzzle, generate_with_seed(42, Mode::Hard));
    assert_eq!(session.cursor.len(), 32);
    assert_eq!(session.state.retry_count, 0);

    let events: Vec<String> = log_lines(session)
        .iter()
        .map(|l| l["event"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(events, ["puzzle_generated", "mode_switch", "puzzle_generated"]);
}

#[test]
fn test_next_puzzle_advances_seed_source() {
    let mut fixed = Session::new(&config(Some(42), Mode::Normal), EventLog::<Vec<u8>>::disabled());
    fixed.apply_action(GameAction::NextPuzzle);
    assert_eq!(fixed.source, SeedSource::Fixed(43));
    assert_eq!(fixed.puzzle.seed, 43);

    let cfg = AppConfig {
        date: PuzzleDate::new(2024, 2, 28),
        ..AppConfig::default()
    };
    let mut daily = Session::new(&cfg, EventLog::<Vec<u8>>::disabled());
    daily.apply_action(GameAction::NextPuzzle);
    daily.apply_action(GameAction::NextPuzzle);
    assert_eq!(daily.puzzle.seed, 20_240_301);
}

#[test]
fn test_seed_source_wraps_to_nonzero() {
    assert_eq!(SeedSource::Fixed(u32::MAX).advance(), SeedSource::Fixed(1));
}
