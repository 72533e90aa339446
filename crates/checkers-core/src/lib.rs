//! Core types for 6×6 checkers.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Side`], [`PieceKind`] and [`Cell`] for piece and cell representation
//! - [`Square`] and [`Direction`] for board coordinates
//! - [`Move`] for steps and capture chains
//! - Text diagrams of board contents

mod diagram;
mod mov;
mod piece;
mod side;
mod square;

pub use diagram::{Diagram, DiagramError};
pub use mov::{Move, MoveParseError};
pub use piece::{Cell, PieceKind};
pub use side::Side;
pub use square::{Direction, Square};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 6;
