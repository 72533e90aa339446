//! Terminal front end for 6x6 checkers.
//!
//! # Modules
//!
//! - [`config`] - `checkers.toml` loading and command-line overrides
//! - [`agent`] - Human, minimax and random players
//! - [`render`] - Board and move-list text
//! - [`runner`] - Game loop and match statistics

pub mod agent;
pub mod config;
pub mod render;
pub mod runner;
