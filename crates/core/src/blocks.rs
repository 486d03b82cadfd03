//! Block set queries.
//!
//! A block set is a plain slice of [`Block`]s. Lookups by cell are linear
//! scans (at most 16 blocks); the movement engine and the generator build an
//! [`Occupancy`] grid instead so their inner loops stay O(1) per cell.
//!
//! Coordinates: (row, col). The occupancy grid covers the extended board
//! `[-1, grid_size]` on both axes so blocks that were just pushed off still
//! register as obstacles.

use crate::types::{Block, Direction, Mode, MAX_GRID_SIZE};

/// Side length of the occupancy grid (board plus one cell on each side).
const EXT: usize = MAX_GRID_SIZE as usize + 2;

/// Fixed-size occupancy grid over the extended board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    /// Row-major flags, `(row + 1) * EXT + (col + 1)`.
    cells: [bool; EXT * EXT],
}

impl Occupancy {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; EXT * EXT],
        }
    }

    /// Build a grid from the positions of `blocks`.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut occ = Self::new();
        for b in blocks {
            occ.insert(b.row, b.col);
        }
        occ
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        let r = row as i16 + 1;
        let c = col as i16 + 1;
        if r < 0 || r >= EXT as i16 || c < 0 || c >= EXT as i16 {
            return None;
        }
        Some(r as usize * EXT + c as usize)
    }

    /// Mark a cell occupied. Returns false if the cell is outside the grid.
    pub fn insert(&mut self, row: i8, col: i8) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.cells[i] = true;
                true
            }
            None => false,
        }
    }

    /// Cells outside the grid are never occupied.
    #[inline]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// True if any of the four orthogonal neighbours is occupied.
    pub fn has_neighbor(&self, row: i8, col: i8) -> bool {
        Direction::ALL.iter().any(|dir| {
            let (dr, dc) = dir.delta();
            self.contains(row + dr, col + dc)
        })
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_block_at(blocks: &[Block], row: i8, col: i8) -> bool {
    blocks.iter().any(|b| b.at(row, col))
}

pub fn get_block_at(blocks: &[Block], row: i8, col: i8) -> Option<&Block> {
    blocks.iter().find(|b| b.at(row, col))
}

/// True iff both coordinates fall inside the mode's center region.
pub fn is_in_center(row: i8, col: i8, mode: Mode) -> bool {
    let c = mode.config();
    row >= c.center_start && row <= c.center_end && col >= c.center_start && col <= c.center_end
}

/// The solved configuration: every center cell filled, ids assigned
/// row-major starting at 0.
pub fn solved_blocks(mode: Mode) -> Vec<Block> {
    let c = mode.config();
    let mut blocks = Vec::with_capacity(c.block_count);
    let mut id = 0u32;
    for row in c.center_start..=c.center_end {
        for col in c.center_start..=c.center_end {
            blocks.push(Block::new(id, row, col));
            id += 1;
        }
    }
    blocks
}

/// Scan from `(start_row, start_col)` along `direction`, collecting blocks
/// until the first empty cell.
///
/// The start cell itself is included, so an empty start cell yields an empty
/// chain.
pub fn get_connected_blocks(
    blocks: &[Block],
    start_row: i8,
    start_col: i8,
    direction: Direction,
) -> Vec<Block> {
    let (dr, dc) = direction.delta();
    let mut connected = Vec::new();
    let (mut row, mut col) = (start_row, start_col);

    while let Some(block) = get_block_at(blocks, row, col) {
        connected.push(*block);
        row += dr;
        col += dc;
    }

    connected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_index_covers_extended_board() {
        assert_eq!(Occupancy::index(-1, -1), Some(0));
        assert_eq!(Occupancy::index(0, 0), Some(EXT + 1));
        assert_eq!(Occupancy::index(8, 8), Some(EXT * EXT - 1));
        assert_eq!(Occupancy::index(-2, 0), None);
        assert_eq!(Occupancy::index(0, 9), None);
    }

    #[test]
    fn occupancy_insert_in_extended_bounds_only() {
        let mut occ = Occupancy::new();
        assert!(occ.insert(-1, 3));
        assert!(occ.contains(-1, 3));
        assert!(!occ.insert(-5, 3));
        assert!(!occ.contains(-5, 3));
        assert!(occ.insert(8, 8));
        assert!(!occ.insert(9, 0));
    }

    #[test]
    fn neighbor_detection() {
        let occ = Occupancy::from_blocks(&[Block::new(0, 3, 3), Block::new(1, 3, 4)]);
        assert!(occ.has_neighbor(3, 3));
        assert!(occ.has_neighbor(3, 4));
        assert!(!occ.has_neighbor(0, 0));
    }

    #[test]
    fn solved_blocks_fill_center_row_major() {
        let blocks = solved_blocks(Mode::Normal);
        assert_eq!(blocks.len(), 9);
        assert_eq!(blocks[0], Block::new(0, 2, 2));
        assert_eq!(blocks[1], Block::new(1, 2, 3));
        assert_eq!(blocks[8], Block::new(8, 4, 4));
    }

    #[test]
    fn connected_blocks_stop_at_first_gap() {
        let blocks = [
            Block::new(0, 0, 2),
            Block::new(1, 1, 2),
            Block::new(2, 3, 2),
        ];
        let chain = get_connected_blocks(&blocks, 0, 2, Direction::Down);
        let ids: Vec<u32> = chain.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 1]);

        assert!(get_connected_blocks(&blocks, 2, 2, Direction::Down).is_empty());
    }
}
