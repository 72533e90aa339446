//! Rules and search for 6x6 checkers.
//!
//! This crate provides:
//! - [`Board`] - Copyable 6x6 board where every move produces a new value
//! - [`Game`] - Game management with history tracking and draw by repetition
//! - Move generation with mandatory, multi-jump captures
//! - Terminal detection and static evaluation
//! - Alpha-beta minimax search
//!
//! # Architecture
//!
//! A board is a flat array of 36 cells. Move generation never mutates its
//! input: capture chains are explored on hypothetical copies, and
//! [`apply_move`] returns a fresh board with promotions already applied.
//!
//! # Example
//!
//! ```
//! use checkers_engine::{choose_move, generate_moves, Board, Game, Side};
//!
//! // Using Board directly (stateless)
//! let board = Board::initial();
//! let moves = generate_moves(&board, Side::Black);
//! println!("Legal moves from starting position: {}", moves.len());
//!
//! let result = choose_move(&board, Side::Black, 3);
//! println!("Best move: {:?} after {} nodes", result.best_move, result.nodes);
//!
//! // Using Game for full game management
//! let mut game = Game::new();
//! game.make_move_notation("(4,1)->(3,0)").unwrap();
//! game.make_move_notation("(1,2)->(2,1)").unwrap();
//! println!("Board after two plies:\n{}", game.board());
//! ```

mod board;
pub mod eval;
mod game;
pub mod movegen;
pub mod rules;
pub mod search;

pub use board::{initial_board, Board};
pub use checkers_core::{Cell, Move, PieceKind, Side, Square};
pub use eval::{evaluate, Evaluator, Material, Positional};
pub use game::{Game, GameError, GameMove};
pub use movegen::{apply_move, enumerate_captures, generate_moves, MoveList};
pub use rules::{is_terminal, terminal_state, DrawReason, GameResult};
pub use search::{choose_move, search, SearchConfig, SearchResult, Searcher, SCORE_INFINITY};
