//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the puzzle rules and the level generator. It has
//! **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the same seed and mode always produce the same puzzle
//! - **Testable**: every rule is a plain function over a block slice
//! - **Portable**: usable from the terminal front end or any other caller
//!
//! # Module Structure
//!
//! - [`blocks`]: block set queries, occupancy grid, connected-chain scan
//! - [`movement`]: the push simulator with ordered collision resolution
//! - [`rules`]: win / lose predicates
//! - [`rng`]: seeded LCG and daily date seeds
//! - [`generator`]: reverse-construction puzzle generator
//! - [`game_state`]: move/retry bookkeeping and edge-click handling
//! - [`snapshot`]: serializable read-only view for rendering
//!
//! # Game Rules
//!
//! - Blocks are pushed inward from one of the four edges along a row or column
//! - The pushed chain is the run of blocks starting at the edge cell
//! - Blocks slide until they hit another block or leave the board by one cell
//! - All blocks in the center region wins; any block off the board loses
//!
//! # Example
//!
//! ```
//! use tui_slide_core::{generate_with_seed, rules, GameState};
//! use tui_slide_types::{GameStatus, Mode};
//!
//! let puzzle = generate_with_seed(42, Mode::Normal);
//! assert_eq!(puzzle, generate_with_seed(42, Mode::Normal));
//!
//! let mut game = GameState::from_puzzle(&puzzle);
//! assert!(!rules::check_lose_condition(&game.blocks, Mode::Normal));
//!
//! // Push down from above column 3.
//! if let Some(report) = game.push_from_edge(-1, 3) {
//!     assert_eq!(report.status, game.game_status);
//! }
//! assert!(matches!(
//!     game.game_status,
//!     GameStatus::Playing | GameStatus::Won | GameStatus::Lost
//! ));
//! ```

pub mod blocks;
pub mod game_state;
pub mod generator;
pub mod movement;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use tui_slide_types as types;

// Re-export commonly used items for convenience
pub use blocks::{
    get_block_at, get_connected_blocks, is_block_at, is_in_center, solved_blocks, Occupancy,
};
pub use game_state::{
    create_initial_state, get_direction_from_click, get_start_position_for_click, GameState,
    PushReport,
};
pub use generator::{generate_puzzle, generate_with_seed, GeneratedPuzzle};
pub use movement::move_blocks;
pub use rng::{resolve_seed, PuzzleDate, SeededRng};
pub use rules::{check_lose_condition, check_win_condition, classify};
pub use snapshot::GameSnapshot;
