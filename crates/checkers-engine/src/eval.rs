//! Static evaluation of non-terminal boards.
//!
//! Scores are always from Black's point of view: positive favors Black,
//! negative favors White.

use crate::Board;
use checkers_core::{Cell, Side, Square};

/// Scores a board for the search.
pub trait Evaluator {
    /// Returns the static score of `board`, positive favoring Black.
    fn evaluate(&self, board: &Board) -> i32;

    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;
}

/// Material count: one point per man, three per king.
#[derive(Debug, Clone, Copy, Default)]
pub struct Material;

const MAN_VALUE: i32 = 1;
const KING_VALUE: i32 = 3;

impl Evaluator for Material {
    fn evaluate(&self, board: &Board) -> i32 {
        Square::all()
            .map(|sq| match board.get(sq) {
                Cell::BlackMan => MAN_VALUE,
                Cell::BlackKing => KING_VALUE,
                Cell::WhiteMan => -MAN_VALUE,
                Cell::WhiteKing => -KING_VALUE,
                Cell::Empty | Cell::Unplayable => 0,
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "material"
    }
}

/// Material score of `board`.
pub fn evaluate(board: &Board) -> i32 {
    Material.evaluate(board)
}

/// Material in hundredths plus small positional terms.
///
/// Each piece earns a bonus for standing on a central square, and each man
/// earns a bonus per row advanced toward its promotion row. The centre table
/// is symmetric under a half-turn, so the starting position scores zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

const POSITIONAL_MAN: i32 = 100;
const POSITIONAL_KING: i32 = 300;
const ADVANCE_BONUS: i32 = 5;

#[rustfmt::skip]
const CENTRE_BONUS: [i32; Square::COUNT] = [
    0,  0,  0,  0,  0,  0,
    0,  0, 10,  0, 10,  0,
    0, 10,  0, 20,  0,  0,
    0,  0, 20,  0, 10,  0,
    0, 10,  0, 10,  0,  0,
    0,  0,  0,  0,  0,  0,
];

impl Evaluator for Positional {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0;
        for side in Side::ALL {
            let sign = match side {
                Side::Black => 1,
                Side::White => -1,
            };
            for (sq, cell) in board.pieces(side) {
                let mut value = CENTRE_BONUS[sq.index()];
                if matches!(cell, Cell::BlackKing | Cell::WhiteKing) {
                    value += POSITIONAL_KING;
                } else {
                    let advanced = sq.row().abs_diff(side.opposite().promotion_row());
                    value += POSITIONAL_MAN + ADVANCE_BONUS * i32::from(advanced);
                }
                score += sign * value;
            }
        }
        score
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn initial_position_is_balanced() {
        assert_eq!(evaluate(&Board::initial()), 0);
        assert_eq!(Positional.evaluate(&Board::initial()), 0);
    }

    #[test]
    fn material_counts_kings_triple() {
        let board = Board::empty()
            .with(sq(0, 1), Cell::BlackKing)
            .with(sq(4, 1), Cell::BlackMan)
            .with(sq(1, 2), Cell::WhiteMan);
        assert_eq!(evaluate(&board), 3 + 1 - 1);

        let board = Board::empty()
            .with(sq(5, 0), Cell::WhiteKing)
            .with(sq(4, 1), Cell::BlackMan);
        assert_eq!(evaluate(&board), 1 - 3);
    }

    #[test]
    fn positional_rewards_advancement() {
        let back = Board::empty().with(sq(5, 0), Cell::BlackMan);
        let forward = Board::empty().with(sq(1, 0), Cell::BlackMan);
        assert_eq!(Positional.evaluate(&back), 100);
        assert_eq!(Positional.evaluate(&forward), 100 + 4 * 5);
    }

    #[test]
    fn positional_is_antisymmetric() {
        let black = Board::empty().with(sq(2, 3), Cell::BlackMan);
        let white = Board::empty().with(sq(3, 2), Cell::WhiteMan);
        assert_eq!(Positional.evaluate(&black), -Positional.evaluate(&white));
    }

    #[test]
    fn evaluator_names() {
        assert_eq!(Material.name(), "material");
        assert_eq!(Positional.name(), "positional");
    }
}
