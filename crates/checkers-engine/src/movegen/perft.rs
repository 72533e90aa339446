//! Leaf counting over the move tree.
//!
//! Known counts from the starting position pin down both move generation
//! and move application.

use super::{apply_move, generate_moves};
use crate::Board;
use checkers_core::Side;

/// Counts the number of leaf nodes at the given depth, `side` moving first.
///
/// Terminal positions are not treated specially: a side without moves simply
/// contributes no leaves below it.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let next = apply_move(board, m, side);
        nodes += perft(&next, side.opposite(), depth - 1);
    }
    nodes
}

/// Splits the leaf count by root move, keyed by move notation and sorted.
pub fn perft_divide(board: &Board, side: Side, depth: u32) -> Vec<(String, u64)> {
    let mut split: Vec<(String, u64)> = generate_moves(board, side)
        .iter()
        .map(|m| {
            let next = apply_move(board, m, side);
            let leaves = perft(&next, side.opposite(), depth.saturating_sub(1));
            (m.to_notation(), leaves)
        })
        .collect();
    split.sort();
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_leaves_at_one() {
        assert_eq!(perft(&Board::initial(), Side::Black, 1), 5);
    }

    #[test]
    fn initial_leaves_at_two() {
        assert_eq!(perft(&Board::initial(), Side::Black, 2), 25);
    }

    #[test]
    fn initial_leaves_at_three() {
        assert_eq!(perft(&Board::initial(), Side::Black, 3), 106);
    }

    #[test]
    fn initial_leaves_at_four() {
        assert_eq!(perft(&Board::initial(), Side::Black, 4), 369);
    }

    #[test]
    fn initial_leaves_at_six() {
        assert_eq!(perft(&Board::initial(), Side::Black, 6), 4104);
    }

    #[test]
    fn perft_divide_sums_to_perft() {
        let board = Board::initial();
        let divide = perft_divide(&board, Side::Black, 3);
        assert_eq!(divide.len(), 5);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, Side::Black, 3));
    }

    #[test]
    fn perft_depth_zero() {
        assert_eq!(perft(&Board::empty(), Side::White, 0), 1);
    }
}
