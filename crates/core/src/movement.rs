//! Movement engine - slides a pushed chain with collision resolution.
//!
//! Blocks are resolved leading-first along the direction of travel, so a
//! block that has already come to rest never has to be revisited: trailing
//! blocks can only stop behind it.
//!
//! The result is bounded by the extended board `[-1, grid_size]`. A block
//! that slides off comes to rest one cell outside and stays in the set;
//! detecting that is [`crate::rules::check_lose_condition`]'s job.

use crate::blocks::Occupancy;
use crate::types::{Block, Direction, Mode};

/// Push `blocks_to_move` (matched to `blocks` by id) in `direction`.
///
/// Stationary blocks are returned unchanged and the output keeps the order of
/// `blocks`. An empty `blocks_to_move` returns `blocks` as-is.
pub fn move_blocks(
    blocks: &[Block],
    blocks_to_move: &[Block],
    direction: Direction,
    mode: Mode,
) -> Vec<Block> {
    if blocks_to_move.is_empty() {
        return blocks.to_vec();
    }

    let config = mode.config();
    let (dr, dc) = direction.delta();
    let is_moving = |b: &Block| blocks_to_move.iter().any(|m| m.id == b.id);

    // Stationary blocks plus every block already resolved in this pass.
    let mut obstacles = Occupancy::new();
    for b in blocks.iter().filter(|b| !is_moving(b)) {
        obstacles.insert(b.row, b.col);
    }

    let mut order = blocks_to_move.to_vec();
    order.sort_by_key(|b| leading_key(b, direction));

    let mut resolved: Vec<(u32, i8, i8)> = Vec::with_capacity(order.len());
    for block in &order {
        let (mut row, mut col) = (block.row, block.col);
        loop {
            let (next_row, next_col) = (row + dr, col + dc);
            if !config.in_extended_bounds(next_row, next_col) {
                break;
            }
            if obstacles.contains(next_row, next_col) {
                break;
            }
            row = next_row;
            col = next_col;
        }
        obstacles.insert(row, col);
        resolved.push((block.id, row, col));
    }

    blocks
        .iter()
        .map(|b| match resolved.iter().find(|(id, _, _)| *id == b.id) {
            Some(&(id, row, col)) => Block { id, row, col },
            None => *b,
        })
        .filter(|b| config.in_extended_bounds(b.row, b.col))
        .collect()
}

/// Sort key placing the block furthest along `direction` first.
#[inline]
fn leading_key(b: &Block, direction: Direction) -> i8 {
    match direction {
        Direction::Down => -b.row,
        Direction::Up => b.row,
        Direction::Right => -b.col,
        Direction::Left => b.col,
    }
}
