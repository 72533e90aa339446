//! Game-ending rules.
//!
//! A side loses when it has no pieces left or no legal move. Repetition draws
//! depend on game history, so they are decided by [`Game`](crate::Game).

use crate::movegen::generate_moves;
use crate::Board;
use checkers_core::Side;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Black wins (White has no pieces or no legal move).
    BlackWins,
    /// White wins (Black has no pieces or no legal move).
    WhiteWins,
    /// Draw with a specific reason.
    Draw(DrawReason),
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// A board seen at the start of an earlier turn came up again.
    Repetition,
}

impl GameResult {
    /// The result where `side` wins.
    #[inline]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Black => GameResult::BlackWins,
            Side::White => GameResult::WhiteWins,
        }
    }

    /// Returns the winning side, or `None` for a draw.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::BlackWins => Some(Side::Black),
            GameResult::WhiteWins => Some(Side::White),
            GameResult::Draw(_) => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::Draw(DrawReason::Repetition) => write!(f, "Draw by repetition"),
        }
    }
}

/// Returns the winner if the board is terminal, otherwise `None`.
///
/// Black is examined first: if Black has no pieces or no legal move, White
/// wins. Otherwise the same test is applied to White. Piece count is always
/// checked before generating moves.
pub fn terminal_state(board: &Board) -> Option<Side> {
    Side::ALL.into_iter().find_map(|side| {
        if !board.has_pieces(side) || generate_moves(board, side).is_empty() {
            Some(side.opposite())
        } else {
            None
        }
    })
}

/// Returns true if the game is over on this board.
pub fn is_terminal(board: &Board) -> bool {
    terminal_state(board).is_some()
}
