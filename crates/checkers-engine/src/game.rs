//! Game management with history tracking.
//!
//! The [`Game`] struct wraps a [`Board`] with everything a single board
//! cannot know on its own:
//! - Whose turn it is
//! - Boards already seen, for draw by repetition
//! - Move history with coordinate notation

use crate::movegen::{apply_move, generate_moves};
use crate::rules::{terminal_state, DrawReason, GameResult};
use crate::{Board, MoveList};
use checkers_core::{Move, MoveParseError, Side};
use std::collections::HashSet;
use thiserror::Error;

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move in internal format.
    pub mov: Move,
    /// The side that played it.
    pub side: Side,
    /// Coordinate notation for the move.
    pub notation: String,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(#[from] MoveParseError),

    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A game of 6x6 checkers, Black moving first.
///
/// A board that was already on the table at the start of an earlier turn ends
/// the game as a draw. Otherwise the game ends when a side has no pieces or no
/// legal move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    /// Boards present at the start of each turn so far.
    seen: HashSet<Board>,
    moves: Vec<GameMove>,
    start: Board,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Side::Black)
    }

    /// Creates a game from a custom board.
    ///
    /// The game may already be over if the board is terminal.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            seen: HashSet::from([board]),
            moves: Vec::new(),
            start: board,
            result: None,
        };
        game.check_game_end();
        game
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the game started from.
    pub fn start_board(&self) -> &Board {
        &self.start
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        generate_moves(&self.board, self.side_to_move)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Plays a move for the side to move.
    pub fn make_move(&mut self, m: &Move) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.legal_moves().contains(m) {
            return Err(GameError::IllegalMove(m.to_notation()));
        }

        self.play(m.clone());
        Ok(())
    }

    /// Plays a move given in coordinate notation, e.g. `(4,1)->(3,0)`.
    pub fn make_move_notation(&mut self, notation: &str) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let m = Move::from_notation(notation)?;
        self.make_move(&m)
    }

    /// Resigns the game for the side to move.
    pub fn resign(&mut self) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        self.result = Some(GameResult::win_for(self.side_to_move.opposite()));
        tracing::trace!(side = %self.side_to_move, "resigned");
        Ok(())
    }

    /// Returns the current board as a diagram.
    pub fn to_diagram(&self) -> String {
        self.board.to_diagram()
    }

    fn play(&mut self, m: Move) {
        let side = self.side_to_move;
        self.board = apply_move(&self.board, &m, side);
        self.side_to_move = side.opposite();

        tracing::trace!(side = %side, mv = %m, ply = self.moves.len() + 1, "move played");
        self.moves.push(GameMove {
            notation: m.to_notation(),
            mov: m,
            side,
        });

        if !self.seen.insert(self.board) {
            self.result = Some(GameResult::Draw(DrawReason::Repetition));
            tracing::trace!(ply = self.moves.len(), "board repeated");
            return;
        }
        self.check_game_end();
    }

    fn check_game_end(&mut self) {
        if let Some(winner) = terminal_state(&self.board) {
            self.result = Some(GameResult::win_for(winner));
            tracing::trace!(winner = %winner, ply = self.moves.len(), "game over");
        }
    }
}
