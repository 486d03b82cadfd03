//! Puzzle generator - reverse construction from the solved board.
//!
//! Generation starts from the solved configuration and applies a number of
//! reverse operations. A reverse operation picks a block, looks along one
//! direction at the run of blocks touching it, and pulls that run out to the
//! board edge. Pushing from that edge slides the run straight back until it
//! hits the picked block, so every reverse operation undoes a legal push and
//! the resulting puzzle is always solvable.
//!
//! The target count `k` is drawn once from the mode's range. Retries are
//! bounded by [`MAX_REVERSE_ATTEMPTS`] across the whole run, so a puzzle may
//! come back with fewer than `k` operations; that is not an error.

use arrayvec::ArrayVec;

use crate::blocks::{solved_blocks, Occupancy};
use crate::rng::{resolve_seed, PuzzleDate, SeededRng};
use crate::types::{
    Block, Direction, GridConfig, Mode, MAX_BLOCKS, MAX_GRID_SIZE, MAX_REVERSE_ATTEMPTS,
};

/// Cells of one adjacent run, nearest the picked block first.
type Run = ArrayVec<(i8, i8), { MAX_GRID_SIZE as usize }>;

/// A generated puzzle together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub blocks: Vec<Block>,
    pub seed: u32,
    pub mode: Mode,
    /// Operation count drawn from the mode's range.
    pub target_operations: u32,
    /// Operations actually applied (may be below the target).
    pub operations_performed: u32,
    /// Loop iterations consumed, successful or not.
    pub attempts: u32,
}

/// Generate a puzzle. `seed` wins over `date`; with neither, today's date
/// is used.
pub fn generate_puzzle(seed: Option<u32>, date: Option<PuzzleDate>, mode: Mode) -> Vec<Block> {
    generate_with_seed(resolve_seed(seed, date), mode).blocks
}

/// Generate the puzzle for a resolved seed.
pub fn generate_with_seed(seed: u32, mode: Mode) -> GeneratedPuzzle {
    let config = mode.config();
    let mut rng = SeededRng::new(seed);
    let mut blocks = solved_blocks(mode);

    let target_operations =
        config.min_reverse_ops + rng.next_index(config.reverse_ops_span as usize) as u32;
    let mut operations_performed = 0u32;
    let mut attempts = 0u32;

    while operations_performed < target_operations && attempts < MAX_REVERSE_ATTEMPTS {
        attempts += 1;

        let occupancy = Occupancy::from_blocks(&blocks);

        // A block with no neighbours cannot be the stopper of any push.
        let candidates: ArrayVec<usize, MAX_BLOCKS> = blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| occupancy.has_neighbor(b.row, b.col))
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            break;
        }

        let block = blocks[candidates[rng.next_index(candidates.len())]];

        let valid: ArrayVec<Direction, 4> = Direction::ALL
            .into_iter()
            .filter(|&dir| can_reverse(&occupancy, config, block, dir))
            .collect();
        if valid.is_empty() {
            continue;
        }

        let direction = valid[rng.next_index(valid.len())];
        let run = adjacent_run(&occupancy, block, direction);
        pull_run_to_edge(&mut blocks, &run, direction, config);

        operations_performed += 1;
    }

    GeneratedPuzzle {
        blocks,
        seed,
        mode,
        target_operations,
        operations_performed,
        attempts,
    }
}

/// The contiguous run of occupied cells starting next to `block`.
fn adjacent_run(occupancy: &Occupancy, block: Block, direction: Direction) -> Run {
    let (dr, dc) = direction.delta();
    let mut run = Run::new();
    let (mut row, mut col) = (block.row + dr, block.col + dc);
    while occupancy.contains(row, col) && !run.is_full() {
        run.push((row, col));
        row += dr;
        col += dc;
    }
    run
}

/// A run can be pulled out iff it is non-empty and nothing lies between its
/// far end and the board edge.
fn can_reverse(
    occupancy: &Occupancy,
    config: &GridConfig,
    block: Block,
    direction: Direction,
) -> bool {
    let run = adjacent_run(occupancy, block, direction);
    let Some(&(last_row, last_col)) = run.last() else {
        return false;
    };

    let (dr, dc) = direction.delta();
    let (mut row, mut col) = (last_row + dr, last_col + dc);
    while config.on_board(row, col) {
        if occupancy.contains(row, col) {
            return false;
        }
        row += dr;
        col += dc;
    }
    true
}

/// Shift every block of `run` along the axis so the leading one lands on
/// the edge cell.
fn pull_run_to_edge(blocks: &mut [Block], run: &Run, direction: Direction, config: &GridConfig) {
    let Some(&(last_row, last_col)) = run.last() else {
        return;
    };

    let edge = match direction {
        Direction::Down | Direction::Right => config.grid_size - 1,
        Direction::Up | Direction::Left => 0,
    };
    let distance = if direction.is_vertical() {
        edge - last_row
    } else {
        edge - last_col
    };

    for b in blocks.iter_mut() {
        if run.contains(&(b.row, b.col)) {
            if direction.is_vertical() {
                b.row += distance;
            } else {
                b.col += distance;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(cells: &[(i8, i8)]) -> Occupancy {
        let mut o = Occupancy::new();
        for &(r, c) in cells {
            o.insert(r, c);
        }
        o
    }

    #[test]
    fn adjacent_run_excludes_picked_block() {
        let o = occ(&[(3, 1), (3, 2), (3, 3), (3, 5)]);
        let run = adjacent_run(&o, Block::new(0, 3, 1), Direction::Right);
        assert_eq!(run.as_slice(), &[(3, 2), (3, 3)]);
    }

    #[test]
    fn reverse_requires_adjacent_run() {
        let o = occ(&[(3, 3)]);
        let cfg = Mode::Normal.config();
        for dir in Direction::ALL {
            assert!(!can_reverse(&o, cfg, Block::new(0, 3, 3), dir));
        }
    }

    #[test]
    fn reverse_rejected_when_path_to_edge_blocked() {
        // Run (3,2)-(3,3) then gap then a block at (3,5).
        let o = occ(&[(3, 1), (3, 2), (3, 3), (3, 5)]);
        let cfg = Mode::Normal.config();
        assert!(!can_reverse(&o, cfg, Block::new(0, 3, 1), Direction::Right));
        // The block at (3,5) itself has a clear path right but no run.
        assert!(!can_reverse(&o, cfg, Block::new(3, 3, 5), Direction::Right));
        // Leftwards from (3,3): run (3,2),(3,1), then (3,0) is empty.
        assert!(can_reverse(&o, cfg, Block::new(2, 3, 3), Direction::Left));
    }

    #[test]
    fn pull_moves_whole_run_to_edge() {
        let cfg = Mode::Normal.config();
        let mut blocks = vec![
            Block::new(0, 2, 2),
            Block::new(1, 2, 3),
            Block::new(2, 2, 4),
        ];
        let o = Occupancy::from_blocks(&blocks);
        let run = adjacent_run(&o, blocks[0], Direction::Right);
        pull_run_to_edge(&mut blocks, &run, Direction::Right, cfg);
        assert_eq!(blocks[0], Block::new(0, 2, 2));
        assert_eq!(blocks[1], Block::new(1, 2, 5));
        assert_eq!(blocks[2], Block::new(2, 2, 6));
    }

    #[test]
    fn pull_up_lands_on_row_zero() {
        let cfg = Mode::Hard.config();
        let mut blocks = vec![Block::new(0, 5, 3), Block::new(1, 4, 3), Block::new(2, 3, 3)];
        let o = Occupancy::from_blocks(&blocks);
        let run = adjacent_run(&o, blocks[0], Direction::Up);
        pull_run_to_edge(&mut blocks, &run, Direction::Up, cfg);
        assert_eq!(blocks[1], Block::new(1, 1, 3));
        assert_eq!(blocks[2], Block::new(2, 0, 3));
    }

    #[test]
    fn forward_push_undoes_every_reverse_operation() {
        use crate::blocks::get_connected_blocks;
        use crate::movement::move_blocks;

        for mode in Mode::ALL {
            let cfg = mode.config();
            let solved = solved_blocks(mode);
            let occupancy = Occupancy::from_blocks(&solved);

            for &block in &solved {
                for dir in Direction::ALL {
                    if !can_reverse(&occupancy, cfg, block, dir) {
                        continue;
                    }
                    let run = adjacent_run(&occupancy, block, dir);
                    let mut scrambled = solved.clone();
                    pull_run_to_edge(&mut scrambled, &run, dir, cfg);

                    // The run's leading block now sits on the edge cell.
                    let lead = scrambled
                        .iter()
                        .copied()
                        .find(|b| {
                            let (r, c) = run[run.len() - 1];
                            solved.iter().any(|s| s.id == b.id && s.at(r, c))
                        })
                        .unwrap();
                    let back = dir.opposite();
                    let chain = get_connected_blocks(&scrambled, lead.row, lead.col, back);
                    assert_eq!(chain.len(), run.len());

                    let restored = move_blocks(&scrambled, &chain, back, mode);
                    assert_eq!(restored, solved, "{:?} {:?} {:?}", mode, block, dir);
                }
            }
        }
    }

    #[test]
    fn seed_42_normal_target_count() {
        // First draw for seed 42 is 1083814273 / 2^32 ~= 0.2523 -> 15 + 3.
        let p = generate_with_seed(42, Mode::Normal);
        assert_eq!(p.target_operations, 18);
        assert!(p.operations_performed <= p.target_operations);
        assert!(p.attempts >= p.operations_performed);
    }
}
