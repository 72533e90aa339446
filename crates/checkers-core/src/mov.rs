//! Move representation.

use crate::Square;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a move from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("a move needs at least two squares, got {0}")]
    TooShort(usize),

    #[error("a step joins exactly two squares with '->'")]
    MalformedStep,
}

/// A checkers move.
///
/// A step carries a piece one diagonal cell into an empty cell. A capture is
/// a chain of landing cells, each two diagonal cells from the previous one,
/// jumping exactly one opposing piece per hop.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Move {
    Step { from: Square, to: Square },
    Capture(Vec<Square>),
}

impl Move {
    /// Creates a simple step.
    #[inline]
    pub const fn step(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    /// Creates a capture chain from its visited cells, origin first.
    #[inline]
    pub fn capture(path: Vec<Square>) -> Self {
        debug_assert!(path.len() >= 2);
        Move::Capture(path)
    }

    /// Returns the origin square.
    #[inline]
    pub fn from(&self) -> Square {
        match self {
            Move::Step { from, .. } => *from,
            Move::Capture(path) => path[0],
        }
    }

    /// Returns the final landing square.
    #[inline]
    pub fn to(&self) -> Square {
        match self {
            Move::Step { to, .. } => *to,
            Move::Capture(path) => path[path.len() - 1],
        }
    }

    /// Returns true for capture chains.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }

    /// Returns every square the piece visits, origin first.
    pub fn path(&self) -> Vec<Square> {
        match self {
            Move::Step { from, to } => vec![*from, *to],
            Move::Capture(path) => path.clone(),
        }
    }

    /// Returns the cells of the pieces this move jumps, in order.
    pub fn captured(&self) -> Vec<Square> {
        match self {
            Move::Step { .. } => Vec::new(),
            Move::Capture(path) => path.windows(2).map(|w| w[0].midpoint(w[1])).collect(),
        }
    }

    /// Returns the move in coordinate notation, e.g. `(4,1)->(3,0)` or `(2,1)x(4,3)`.
    pub fn to_notation(&self) -> String {
        match self {
            Move::Step { from, to } => format!("{}->{}", from, to),
            Move::Capture(path) => path
                .iter()
                .map(|sq| sq.to_string())
                .collect::<Vec<_>>()
                .join("x"),
        }
    }

    /// Parses coordinate notation produced by [`Move::to_notation`].
    ///
    /// Only the syntax is checked; whether the move is legal depends on the board.
    pub fn from_notation(s: &str) -> Result<Self, MoveParseError> {
        let s = s.trim();
        if let Some((from, to)) = s.split_once("->") {
            if to.contains("->") {
                return Err(MoveParseError::MalformedStep);
            }
            return Ok(Move::step(parse_square(from)?, parse_square(to)?));
        }

        let path = s
            .split('x')
            .map(parse_square)
            .collect::<Result<Vec<_>, _>>()?;
        if path.len() < 2 {
            return Err(MoveParseError::TooShort(path.len()));
        }
        Ok(Move::Capture(path))
    }
}

fn parse_square(s: &str) -> Result<Square, MoveParseError> {
    Square::from_notation(s).ok_or_else(|| MoveParseError::InvalidSquare(s.trim().to_string()))
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
