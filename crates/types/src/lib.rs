//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the puzzle.
//! All types are plain data with no behavior beyond lookups, so they can be
//! shared by the rules engine, the generator, input mapping and rendering.
//!
//! # Board Geometry
//!
//! Each [`Mode`] maps to one immutable [`GridConfig`]:
//!
//! | Mode | Grid | Center | Blocks | Reverse operations |
//! |------|------|--------|--------|--------------------|
//! | `normal` | 7x7 | 2..=4 | 9 | 15..=29 |
//! | `hard` | 8x8 | 2..=5 | 16 | 25..=44 |
//!
//! Coordinates are `(row, col)` with `row` growing downwards. The cells one
//! step outside the board (`-1` and `grid_size`) are the edge cells a push is
//! started from, and are also where a block ends up when it is pushed off.
//!
//! # Examples
//!
//! ```
//! use tui_slide_types::{Direction, Mode};
//!
//! let config = Mode::Normal.config();
//! assert_eq!(config.grid_size, 7);
//! assert_eq!(config.block_count, 9);
//!
//! assert_eq!(Mode::from_str("HARD"), Some(Mode::Hard));
//! assert_eq!(Direction::Down.delta(), (1, 0));
//! assert_eq!(Direction::from_delta(0, -1), Some(Direction::Left));
//! assert_eq!(Direction::from_delta(1, 1), None);
//! ```

use serde::{Deserialize, Serialize};

/// Largest grid side length of any mode.
pub const MAX_GRID_SIZE: u8 = 8;

/// Largest block count of any mode.
pub const MAX_BLOCKS: usize = 16;

/// Global cap on generator attempts, successful or not.
pub const MAX_REVERSE_ATTEMPTS: u32 = 2000;

/// Fixed timestep of the terminal loop in milliseconds.
pub const TICK_MS: u32 = 16;

/// Highlight duration for blocks that just slid.
pub const SLIDE_FLASH_MS: u32 = 120;

/// Static per-mode geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Side length of the playable board.
    pub grid_size: i8,
    /// First row/col of the winning region (inclusive).
    pub center_start: i8,
    /// Last row/col of the winning region (inclusive).
    pub center_end: i8,
    /// Number of blocks in the solved configuration.
    pub block_count: usize,
    /// Smallest number of reverse operations the generator aims for.
    pub min_reverse_ops: u32,
    /// Width of the reverse-operation range (`min + floor(r * span)`).
    pub reverse_ops_span: u32,
}

impl GridConfig {
    /// True if `(row, col)` is on the playable board.
    #[inline]
    pub fn on_board(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.grid_size && col >= 0 && col < self.grid_size
    }

    /// True if `(row, col)` is on the board or one cell outside it.
    #[inline]
    pub fn in_extended_bounds(&self, row: i8, col: i8) -> bool {
        row >= -1 && row <= self.grid_size && col >= -1 && col <= self.grid_size
    }

    /// Side length of the center region.
    pub fn center_size(&self) -> i8 {
        self.center_end - self.center_start + 1
    }
}

const NORMAL: GridConfig = GridConfig {
    grid_size: 7,
    center_start: 2,
    center_end: 4,
    block_count: 9,
    min_reverse_ops: 15,
    reverse_ops_span: 15,
};

const HARD: GridConfig = GridConfig {
    grid_size: 8,
    center_start: 2,
    center_end: 5,
    block_count: 16,
    min_reverse_ops: 25,
    reverse_ops_span: 20,
};

/// Game mode. Each mode owns exactly one [`GridConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Hard,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Normal, Mode::Hard];

    pub fn config(self) -> &'static GridConfig {
        match self {
            Mode::Normal => &NORMAL,
            Mode::Hard => &HARD,
        }
    }

    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Mode::Normal),
            "hard" => Some(Mode::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Hard => "hard",
        }
    }

    /// The other mode (used by the mode toggle).
    pub fn toggled(self) -> Self {
        match self {
            Mode::Normal => Mode::Hard,
            Mode::Hard => Mode::Normal,
        }
    }
}

/// A unit block with a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub row: i8,
    pub col: i8,
}

impl Block {
    pub const fn new(id: u32, row: i8, col: i8) -> Self {
        Self { id, row, col }
    }

    #[inline]
    pub fn at(&self, row: i8, col: i8) -> bool {
        self.row == row && self.col == col
    }
}

/// Push direction. Only the four orthogonal unit vectors exist.
///
/// The declaration order is the order in which the generator considers
/// directions, so it must stay `Right, Left, Down, Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// `(d_row, d_col)` unit vector.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }

    /// Map a `(d_row, d_col)` vector back to a direction.
    ///
    /// Returns `None` for zero, diagonal or non-unit vectors.
    pub fn from_delta(d_row: i8, d_col: i8) -> Option<Self> {
        match (d_row, d_col) {
            (0, 1) => Some(Direction::Right),
            (0, -1) => Some(Direction::Left),
            (1, 0) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Up),
            _ => None,
        }
    }

    /// Like [`Direction::from_delta`], but a malformed vector is a caller bug.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one component is `±1` and the other is `0`.
    pub fn expect_delta(d_row: i8, d_col: i8) -> Self {
        match Self::from_delta(d_row, d_col) {
            Some(dir) => dir,
            None => panic!("invalid push direction ({}, {})", d_row, d_col),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

/// Caller-side classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Player actions produced by input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the edge cursor one cell clockwise
    CursorNext,
    /// Move the edge cursor one cell counter-clockwise
    CursorPrev,
    /// Push from the edge cell under the cursor
    Push,
    /// Restart the current puzzle from its starting layout
    Retry,
    /// Switch between normal and hard
    SwitchMode,
    /// Load the puzzle of the following day
    NextPuzzle,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_slide_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("push"), Some(GameAction::Push));
    /// assert_eq!(GameAction::from_str("cursorNext"), Some(GameAction::CursorNext));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursornext" => Some(GameAction::CursorNext),
            "cursorprev" => Some(GameAction::CursorPrev),
            "push" => Some(GameAction::Push),
            "retry" => Some(GameAction::Retry),
            "switchmode" => Some(GameAction::SwitchMode),
            "nextpuzzle" => Some(GameAction::NextPuzzle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorNext => "cursorNext",
            GameAction::CursorPrev => "cursorPrev",
            GameAction::Push => "push",
            GameAction::Retry => "retry",
            GameAction::SwitchMode => "switchMode",
            GameAction::NextPuzzle => "nextPuzzle",
        }
    }
}
