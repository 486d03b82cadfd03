//! Terminal input module.
//!
//! This module is independent of any UI framework beyond key events. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! edge cursor used to pick which row or column to push.

pub mod cursor;
pub mod map;

pub use tui_slide_types as types;

pub use cursor::EdgeCursor;
pub use map::{handle_key_event, should_quit};
