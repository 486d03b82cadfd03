//! Puzzle generator tests - determinism and board invariants

use std::collections::HashSet;

use tui_slide::core::{
    check_lose_condition, check_win_condition, generate_puzzle, generate_with_seed, Occupancy,
    PuzzleDate,
};
use tui_slide::types::{Block, Mode, MAX_REVERSE_ATTEMPTS};

fn assert_valid_puzzle(blocks: &[Block], mode: Mode) {
    let config = mode.config();
    assert_eq!(blocks.len(), config.block_count);

    let mut cells = HashSet::new();
    for b in blocks {
        assert!(
            config.on_board(b.row, b.col),
            "block {} off board at ({}, {})",
            b.id,
            b.row,
            b.col
        );
        assert!(cells.insert((b.row, b.col)), "duplicate cell ({}, {})", b.row, b.col);
    }

    let mut ids: Vec<u32> = blocks.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..config.block_count as u32).collect::<Vec<_>>());

    assert!(!check_lose_condition(blocks, mode));
}

#[test]
fn test_same_seed_same_puzzle() {
    let a = generate_puzzle(Some(42), None, Mode::Normal);
    let b = generate_puzzle(Some(42), None, Mode::Normal);
    assert_eq!(a, b);
}

fn layout(cells: &[(i8, i8)]) -> Vec<Block> {
    cells
        .iter()
        .enumerate()
        .map(|(id, &(row, col))| Block::new(id as u32, row, col))
        .collect()
}

#[test]
fn test_known_puzzle_normal_seed_42() {
    let expected = layout(&[
        (2, 0),
        (2, 1),
        (2, 4),
        (0, 2),
        (3, 3),
        (3, 6),
        (6, 2),
        (4, 0),
        (4, 4),
    ]);
    assert_eq!(generate_puzzle(Some(42), None, Mode::Normal), expected);

    let p = generate_with_seed(42, Mode::Normal);
    assert_eq!(p.target_operations, 18);
    assert_eq!(p.operations_performed, 18);
}

#[test]
fn test_known_puzzle_hard_seed_42() {
    let expected = layout(&[
        (2, 0),
        (2, 3),
        (2, 6),
        (2, 7),
        (3, 2),
        (0, 7),
        (7, 6),
        (7, 7),
        (4, 0),
        (4, 3),
        (0, 4),
        (1, 5),
        (7, 0),
        (5, 1),
        (5, 4),
        (5, 7),
    ]);
    let p = generate_with_seed(42, Mode::Hard);
    assert_eq!(p.blocks, expected);
    assert_eq!(p.operations_performed, 30);
}

#[test]
fn test_known_daily_puzzle_hard() {
    let expected = layout(&[
        (0, 0),
        (2, 5),
        (2, 7),
        (0, 7),
        (3, 2),
        (0, 3),
        (1, 7),
        (7, 7),
        (4, 0),
        (4, 3),
        (4, 4),
        (4, 7),
        (7, 2),
        (7, 0),
        (5, 1),
        (5, 7),
    ]);
    let date = PuzzleDate::new(2024, 5, 17);
    assert_eq!(generate_puzzle(None, date, Mode::Hard), expected);
    assert_eq!(generate_with_seed(20_240_517, Mode::Hard).operations_performed, 34);
}

#[test]
fn test_seed_takes_precedence_over_date() {
    let date = PuzzleDate::new(2024, 5, 17);
    assert_eq!(
        generate_puzzle(Some(42), date, Mode::Normal),
        generate_puzzle(Some(42), None, Mode::Normal)
    );
}

#[test]
fn test_date_seed_matches_explicit_seed() {
    let date = PuzzleDate::new(2024, 5, 17).unwrap();
    assert_eq!(
        generate_puzzle(None, Some(date), Mode::Hard),
        generate_with_seed(20_240_517, Mode::Hard).blocks
    );
}

#[test]
fn test_distinct_seeds_usually_differ() {
    let puzzles: HashSet<Vec<Block>> = (1..=20u32)
        .map(|s| generate_with_seed(s * 7919, Mode::Normal).blocks)
        .collect();
    // Collisions are possible in principle, but not across most of 20 seeds.
    assert!(puzzles.len() > 15, "only {} distinct puzzles", puzzles.len());
}

#[test]
fn test_mode_changes_geometry() {
    let normal = generate_with_seed(42, Mode::Normal);
    let hard = generate_with_seed(42, Mode::Hard);
    assert_eq!(normal.blocks.len(), 9);
    assert_eq!(hard.blocks.len(), 16);
    assert_ne!(normal.blocks, hard.blocks);
}

#[test]
fn test_generated_puzzles_are_valid() {
    for mode in Mode::ALL {
        for seed in [1u32, 2, 42, 1234, 20_240_101, 20_261_019, u32::MAX] {
            let p = generate_with_seed(seed, mode);
            assert_valid_puzzle(&p.blocks, mode);
        }
    }
}

#[test]
fn test_operation_counts_within_range() {
    for mode in Mode::ALL {
        let config = mode.config();
        let max = config.min_reverse_ops + config.reverse_ops_span - 1;
        for seed in 1..=50u32 {
            let p = generate_with_seed(seed, mode);
            assert!(p.target_operations >= config.min_reverse_ops);
            assert!(p.target_operations <= max);
            assert!(p.operations_performed <= p.target_operations);
            assert!(p.attempts <= MAX_REVERSE_ATTEMPTS);
            assert!(p.attempts >= p.operations_performed);
            assert_eq!(p.seed, seed);
            assert_eq!(p.mode, mode);
        }
    }
}

#[test]
fn test_generation_reports_full_run_when_not_capped() {
    // A run stopping below its target either hit the attempt cap or ran out
    // of blocks with a neighbour.
    for seed in 1..=30u32 {
        let p = generate_with_seed(seed, Mode::Hard);
        if p.operations_performed < p.target_operations {
            let occ = Occupancy::from_blocks(&p.blocks);
            let isolated = p.blocks.iter().all(|b| !occ.has_neighbor(b.row, b.col));
            assert!(p.attempts == MAX_REVERSE_ATTEMPTS || isolated);
        }
    }
}

#[test]
fn test_most_puzzles_are_scrambled() {
    let solved = (1..=20u32)
        .filter(|&s| check_win_condition(&generate_with_seed(s, Mode::Normal).blocks, Mode::Normal))
        .count();
    assert!(solved < 5, "{} of 20 puzzles came out solved", solved);
}
