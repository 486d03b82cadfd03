//! Snapshot - the read-only, serializable view of a game state.

use serde::Serialize;

use crate::types::{Block, GameStatus, Mode};

/// Read-only view of a [`crate::GameState`] for rendering and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub grid_size: i8,
    pub center_start: i8,
    pub center_end: i8,
    pub blocks: Vec<Block>,
    pub move_count: u32,
    pub retry_count: u32,
    pub start_time_ms: u64,
    pub is_animating: bool,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub last_moved: Vec<u32>,
}

impl GameSnapshot {
    pub fn block_at(&self, row: i8, col: i8) -> Option<&Block> {
        self.blocks.iter().find(|b| b.at(row, col))
    }

    pub fn in_center(&self, row: i8, col: i8) -> bool {
        row >= self.center_start
            && row <= self.center_end
            && col >= self.center_start
            && col <= self.center_end
    }

    /// One string per board row: `#` block, `+` empty center, `.` empty.
    pub fn board_rows(&self) -> Vec<String> {
        (0..self.grid_size)
            .map(|row| {
                (0..self.grid_size)
                    .map(|col| {
                        if self.block_at(row, col).is_some() {
                            '#'
                        } else if self.in_center(row, col) {
                            '+'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let config = Mode::Normal.config();
        Self {
            mode: Mode::Normal,
            grid_size: config.grid_size,
            center_start: config.center_start,
            center_end: config.center_end,
            blocks: Vec::new(),
            move_count: 0,
            retry_count: 0,
            start_time_ms: 0,
            is_animating: false,
            status: GameStatus::Playing,
            seed: None,
            last_moved: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::create_initial_state;

    #[test]
    fn solved_board_rows() {
        let snap = create_initial_state(Mode::Normal).snapshot();
        let rows = snap.board_rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ".......");
        assert_eq!(rows[2], "..###..");
        assert_eq!(rows[4], "..###..");
    }

    #[test]
    fn serializes_lowercase_enums() {
        let snap = create_initial_state(Mode::Hard).snapshot();
        let v = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["mode"], "hard");
        assert_eq!(v["status"], "playing");
        assert_eq!(v["blocks"].as_array().unwrap().len(), 16);
        assert!(v.get("seed").is_none());
    }
}
