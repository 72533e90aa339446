//! Board coordinates and diagonal directions.

use std::fmt;

use crate::{Side, BOARD_SIZE};

/// One of the four diagonal directions.
///
/// "Up" is toward row 0 (Black's promotion row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    UpLeft = 0,
    UpRight = 1,
    DownLeft = 2,
    DownRight = 3,
}

impl Direction {
    /// All directions, in the order move generation visits them.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the (row, col) delta of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Returns the two directions a man of `side` may move in.
    #[inline]
    pub const fn forward(side: Side) -> [Direction; 2] {
        match side {
            Side::Black => [Direction::UpLeft, Direction::UpRight],
            Side::White => [Direction::DownLeft, Direction::DownRight],
        }
    }
}

/// A cell on the 6×6 board, indexed 0-35 in row-major order.
///
/// Row 0 is White's back rank and Black's promotion row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of cells on the board.
    pub const COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Creates a square from row and column, or `None` if off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-35).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Returns the index (0-35).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns true for the dark squares pieces live on, where `(row + col)` is odd.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the square `steps` cells away in `dir`, if it is on the board.
    #[inline]
    pub const fn offset(self, dir: Direction, steps: i8) -> Option<Square> {
        let (dr, dc) = dir.delta();
        let row = self.row() as i8 + dr * steps;
        let col = self.col() as i8 + dc * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the cell halfway between two squares two diagonal steps apart.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Square {
        let row = (self.row() + other.row()) / 2;
        let col = (self.col() + other.col()) / 2;
        Square(row * BOARD_SIZE + col)
    }

    /// Parses `(row,col)` or `row,col`.
    pub fn from_notation(s: &str) -> Option<Self> {
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);
        let (row, col) = inner.split_once(',')?;
        let row = row.trim().parse::<u8>().ok()?;
        let col = col.trim().parse::<u8>().ok()?;
        Square::new(row, col)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}
