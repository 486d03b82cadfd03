//! Game state - the thin caller-side wrapper around the rules engine.
//!
//! Holds the current block set plus the bookkeeping a front end needs (move
//! and retry counters, status, animation flag) and turns clicks on edge cells
//! into pushes. All rule work is delegated to [`crate::movement`] and
//! [`crate::rules`].

use std::time::{SystemTime, UNIX_EPOCH};

use crate::blocks::{get_connected_blocks, solved_blocks};
use crate::generator::GeneratedPuzzle;
use crate::movement::move_blocks;
use crate::rules::classify;
use crate::snapshot::GameSnapshot;
use crate::types::{Block, Direction, GameStatus, Mode};

/// Result of a push that was actually applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    pub direction: Direction,
    /// Entry cell on the board the chain was scanned from.
    pub start: (i8, i8),
    /// Ids of blocks whose position changed.
    pub moved: Vec<u32>,
    /// Size of the pushed chain (zero when the entry cell was empty).
    pub chain_len: usize,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub blocks: Vec<Block>,
    /// Layout restored by [`GameState::retry`].
    initial_blocks: Vec<Block>,
    pub move_count: u32,
    pub retry_count: u32,
    /// Wall-clock start in milliseconds since the Unix epoch.
    pub start_time_ms: u64,
    pub is_animating: bool,
    pub game_status: GameStatus,
    pub mode: Mode,
    /// Seed the puzzle was generated from, if any.
    pub seed: Option<u32>,
    /// Blocks moved by the most recent push.
    pub last_moved: Vec<u32>,
}

/// The solved configuration wrapped in a fresh state.
///
/// The blocks are not a playable scramble; callers substitute generator
/// output (see [`GameState::from_puzzle`]).
pub fn create_initial_state(mode: Mode) -> GameState {
    GameState::with_blocks(mode, solved_blocks(mode), None)
}

impl GameState {
    pub fn from_puzzle(puzzle: &GeneratedPuzzle) -> Self {
        Self::with_blocks(puzzle.mode, puzzle.blocks.clone(), Some(puzzle.seed))
    }

    fn with_blocks(mode: Mode, blocks: Vec<Block>, seed: Option<u32>) -> Self {
        Self {
            initial_blocks: blocks.clone(),
            blocks,
            move_count: 0,
            retry_count: 0,
            start_time_ms: now_ms(),
            is_animating: false,
            game_status: GameStatus::Playing,
            mode,
            seed,
            last_moved: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        !self.game_status.is_over()
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.is_animating = animating;
    }

    /// Push from a click on an edge cell.
    ///
    /// Returns `None` when the click is not on an edge cell, the game is
    /// over, or an animation is running.
    pub fn push_from_edge(&mut self, click_row: i8, click_col: i8) -> Option<PushReport> {
        let direction = get_direction_from_click(click_row, click_col, self.mode)?;
        let (row, col) = get_start_position_for_click(click_row, click_col, self.mode)?;
        self.push(row, col, direction)
    }

    /// Push the chain starting at `(start_row, start_col)` in `direction`.
    pub fn push(&mut self, start_row: i8, start_col: i8, direction: Direction) -> Option<PushReport> {
        if !self.is_playing() || self.is_animating {
            return None;
        }

        let chain = get_connected_blocks(&self.blocks, start_row, start_col, direction);
        let next = move_blocks(&self.blocks, &chain, direction, self.mode);

        let moved: Vec<u32> = next
            .iter()
            .filter(|b| {
                self.blocks
                    .iter()
                    .any(|old| old.id == b.id && (old.row, old.col) != (b.row, b.col))
            })
            .map(|b| b.id)
            .collect();

        if !chain.is_empty() {
            self.move_count += 1;
        }
        self.blocks = next;
        self.game_status = classify(&self.blocks, self.mode);
        self.last_moved = moved.clone();

        Some(PushReport {
            direction,
            start: (start_row, start_col),
            moved,
            chain_len: chain.len(),
            status: self.game_status,
        })
    }

    /// Restore the starting layout and count a retry.
    pub fn retry(&mut self) {
        self.blocks = self.initial_blocks.clone();
        self.retry_count += 1;
        self.move_count = 0;
        self.is_animating = false;
        self.game_status = GameStatus::Playing;
        self.last_moved.clear();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its allocations.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        let config = self.mode.config();
        snap.mode = self.mode;
        snap.grid_size = config.grid_size;
        snap.center_start = config.center_start;
        snap.center_end = config.center_end;
        snap.blocks.clear();
        snap.blocks.extend_from_slice(&self.blocks);
        snap.move_count = self.move_count;
        snap.retry_count = self.retry_count;
        snap.start_time_ms = self.start_time_ms;
        snap.is_animating = self.is_animating;
        snap.status = self.game_status;
        snap.seed = self.seed;
        snap.last_moved.clear();
        snap.last_moved.extend_from_slice(&self.last_moved);
    }
}

/// Direction of the push started by clicking `(click_row, click_col)`.
///
/// Only the four edge lines just outside the board produce a direction;
/// row edges are checked before column edges.
pub fn get_direction_from_click(click_row: i8, click_col: i8, mode: Mode) -> Option<Direction> {
    let n = mode.config().grid_size;
    if click_row == -1 {
        Some(Direction::Down)
    } else if click_row == n {
        Some(Direction::Up)
    } else if click_col == -1 {
        Some(Direction::Right)
    } else if click_col == n {
        Some(Direction::Left)
    } else {
        None
    }
}

/// First board cell scanned for the push started at an edge click.
pub fn get_start_position_for_click(click_row: i8, click_col: i8, mode: Mode) -> Option<(i8, i8)> {
    let n = mode.config().grid_size;
    if click_row == -1 {
        Some((0, click_col))
    } else if click_row == n {
        Some((n - 1, click_col))
    } else if click_col == -1 {
        Some((click_row, 0))
    } else if click_col == n {
        Some((click_row, n - 1))
    } else {
        None
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_solved_and_playing() {
        let gs = create_initial_state(Mode::Hard);
        assert_eq!(gs.blocks.len(), 16);
        assert_eq!(gs.move_count, 0);
        assert_eq!(gs.retry_count, 0);
        assert!(!gs.is_animating);
        assert_eq!(gs.game_status, GameStatus::Playing);
        assert_eq!(gs.seed, None);
    }

    #[test]
    fn click_mapping_edges() {
        let m = Mode::Normal;
        assert_eq!(get_direction_from_click(-1, 3, m), Some(Direction::Down));
        assert_eq!(get_start_position_for_click(-1, 3, m), Some((0, 3)));
        assert_eq!(get_direction_from_click(7, 3, m), Some(Direction::Up));
        assert_eq!(get_start_position_for_click(7, 3, m), Some((6, 3)));
        assert_eq!(get_direction_from_click(2, -1, m), Some(Direction::Right));
        assert_eq!(get_start_position_for_click(2, -1, m), Some((2, 0)));
        assert_eq!(get_direction_from_click(2, 7, m), Some(Direction::Left));
        assert_eq!(get_start_position_for_click(2, 7, m), Some((2, 6)));
    }

    #[test]
    fn click_inside_board_is_ignored() {
        let mut gs = create_initial_state(Mode::Normal);
        for row in 0..7 {
            for col in 0..7 {
                assert_eq!(get_direction_from_click(row, col, Mode::Normal), None);
                assert_eq!(get_start_position_for_click(row, col, Mode::Normal), None);
                assert!(gs.push_from_edge(row, col).is_none());
            }
        }
        assert_eq!(gs.move_count, 0);
    }

    #[test]
    fn push_into_empty_lane_does_not_count() {
        let mut gs = create_initial_state(Mode::Normal);
        let report = gs.push_from_edge(-1, 0).unwrap();
        assert_eq!(report.chain_len, 0);
        assert!(report.moved.is_empty());
        assert_eq!(gs.move_count, 0);
        assert_eq!(gs.game_status, GameStatus::Won);
    }

    #[test]
    fn animating_blocks_input() {
        let mut gs = create_initial_state(Mode::Normal);
        gs.game_status = GameStatus::Playing;
        gs.set_animating(true);
        assert!(gs.push_from_edge(-1, 3).is_none());
    }
}
