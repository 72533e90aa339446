//! Piece and cell-state representation.

use crate::Side;

/// The two kinds of checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Man => write!(f, "Man"),
            PieceKind::King => write!(f, "King"),
        }
    }
}

/// The state of a single board cell.
///
/// Unplayable cells are the light squares, where `(row + col)` is even.
/// They never hold a piece and never change during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Unplayable,
    #[default]
    Empty,
    BlackMan,
    WhiteMan,
    BlackKing,
    WhiteKing,
}

impl Cell {
    /// Builds the cell holding a piece of the given side and kind.
    #[inline]
    pub const fn piece(side: Side, kind: PieceKind) -> Self {
        match (side, kind) {
            (Side::Black, PieceKind::Man) => Cell::BlackMan,
            (Side::Black, PieceKind::King) => Cell::BlackKing,
            (Side::White, PieceKind::Man) => Cell::WhiteMan,
            (Side::White, PieceKind::King) => Cell::WhiteKing,
        }
    }

    /// Returns the owner of the piece on this cell, if any.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
            Cell::WhiteMan | Cell::WhiteKing => Some(Side::White),
            Cell::Unplayable | Cell::Empty => None,
        }
    }

    /// Returns the kind of the piece on this cell, if any.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::BlackMan | Cell::WhiteMan => Some(PieceKind::Man),
            Cell::BlackKing | Cell::WhiteKing => Some(PieceKind::King),
            Cell::Unplayable | Cell::Empty => None,
        }
    }

    /// Returns true if the cell holds a piece.
    #[inline]
    pub const fn is_piece(self) -> bool {
        self.side().is_some()
    }

    /// Returns true if the cell holds a piece of `side`.
    #[inline]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Returns the promoted form of a man; every other state is returned unchanged.
    #[inline]
    pub const fn promoted(self) -> Self {
        match self {
            Cell::BlackMan => Cell::BlackKing,
            Cell::WhiteMan => Cell::WhiteKing,
            other => other,
        }
    }

    /// Returns the diagram character for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Unplayable => '_',
            Cell::Empty => '.',
            Cell::BlackMan => 'b',
            Cell::WhiteMan => 'w',
            Cell::BlackKing => 'B',
            Cell::WhiteKing => 'W',
        }
    }

    /// Parses a diagram character.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '_' => Some(Cell::Unplayable),
            '.' => Some(Cell::Empty),
            'b' => Some(Cell::BlackMan),
            'w' => Some(Cell::WhiteMan),
            'B' => Some(Cell::BlackKing),
            'W' => Some(Cell::WhiteKing),
            _ => None,
        }
    }
}
