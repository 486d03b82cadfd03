//! Win / lose predicates.

use crate::blocks::is_in_center;
use crate::types::{Block, GameStatus, Mode};

/// True iff every block sits inside the center region.
pub fn check_win_condition(blocks: &[Block], mode: Mode) -> bool {
    blocks.iter().all(|b| is_in_center(b.row, b.col, mode))
}

/// True iff any block lies outside `[0, grid_size - 1]` on either axis.
pub fn check_lose_condition(blocks: &[Block], mode: Mode) -> bool {
    let config = mode.config();
    blocks.iter().any(|b| !config.on_board(b.row, b.col))
}

/// Classify a board. Win is checked before lose.
pub fn classify(blocks: &[Block], mode: Mode) -> GameStatus {
    if check_win_condition(blocks, mode) {
        GameStatus::Won
    } else if check_lose_condition(blocks, mode) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
