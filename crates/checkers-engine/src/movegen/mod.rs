//! Move generation.
//!
//! This module provides legal move generation for checkers boards. Captures
//! are mandatory: if any piece of the side to move can jump, only capture
//! chains are legal.

mod captures;
pub mod perft;

use crate::Board;
use checkers_core::{Cell, Direction, Move, Side};

pub use captures::enumerate_captures;

/// An ordered list of moves.
///
/// Generation order is part of the contract: the search breaks ties by it,
/// so the list never reorders or deduplicates what it is given.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns true if the list contains a move equal to `m`.
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

static BLACK_MAN_DIRECTIONS: [Direction; 2] = Direction::forward(Side::Black);
static WHITE_MAN_DIRECTIONS: [Direction; 2] = Direction::forward(Side::White);

/// Returns the directions the piece on `cell` may move and capture in.
///
/// Men only move toward the opponent's back row; kings use all four diagonals.
pub fn piece_directions(cell: Cell) -> &'static [Direction] {
    match cell {
        Cell::BlackMan => &BLACK_MAN_DIRECTIONS,
        Cell::WhiteMan => &WHITE_MAN_DIRECTIONS,
        Cell::BlackKing | Cell::WhiteKing => &Direction::ALL,
        Cell::Empty | Cell::Unplayable => &[],
    }
}

/// Generates all legal moves for `side`.
///
/// Pieces are visited in row-major order. For each piece, single steps come in
/// direction order, and capture chains in the order the enumerator finds them.
pub fn generate_moves(board: &Board, side: Side) -> MoveList {
    let mut steps = MoveList::new();
    let mut captures = MoveList::new();

    for (from, cell) in board.pieces(side) {
        for &dir in piece_directions(cell) {
            if let Some(to) = from.offset(dir, 1) {
                if board.get(to) == Cell::Empty {
                    steps.push(Move::step(from, to));
                }
            }
        }

        for chain in enumerate_captures(board, from, cell) {
            captures.push(Move::Capture(chain));
        }
    }

    if captures.is_empty() {
        steps
    } else {
        captures
    }
}

/// Applies a move for `side`, returning the new board.
///
/// The move must come from [`generate_moves`] for the same board and side;
/// it is not validated here. Men reaching their promotion row are crowned.
pub fn apply_move(board: &Board, m: &Move, side: Side) -> Board {
    debug_assert!(board.get(m.from()).belongs_to(side));
    let mut next = *board;

    match m {
        Move::Step { from, to } => {
            let piece = next.get(*from);
            next.set(*from, Cell::Empty);
            next.set(*to, piece);
        }
        Move::Capture(path) => {
            for hop in path.windows(2) {
                let (from, to) = (hop[0], hop[1]);
                let piece = next.get(from);
                next.set(from, Cell::Empty);
                next.set(from.midpoint(to), Cell::Empty);
                next.set(to, piece);
            }
        }
    }

    next.promote_men();
    next
}
