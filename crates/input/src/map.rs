//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor: right/down walk the ring clockwise, left/up counter-clockwise
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::CursorNext),
        KeyCode::Left
        | KeyCode::Up
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::CursorPrev),

        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Push),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Retry),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::SwitchMode),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NextPuzzle),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
