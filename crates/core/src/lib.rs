//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on terminals, timers or I/O:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the caller decides when ticks happen and how to draw
//!
//! # Module Structure
//!
//! - [`pieces`]: shape table, rotation variants per family
//! - [`piece`]: a live piece (family, colour, anchor, rotation index)
//! - [`board`]: 10x20 grid with collision test, flatten and line clearing
//! - [`scoring`]: lines, score, level and gravity interval
//! - [`game_state`]: the controller state machine driving all of the above
//! - [`events`]: notifications emitted by the controller
//! - [`snapshot`]: a copyable frame of state for renderers
//! - [`rng`]: seeded LCG for uniform piece choices
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::Game;
//! use tui_blocks_types::Command;
//!
//! let mut game = Game::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::Drop);
//!
//! // The first piece landed and a new one spawned.
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(game.is_running());
//! ```
//!
//! # Timing
//!
//! The core has no clock. Call [`Game::tick`](game_state::Game::tick) once per
//! [`Game::gravity_interval`](game_state::Game::gravity_interval); the
//! `tui-blocks-engine` crate does this with a cooperative scheduler.

pub mod board;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardGrid};
pub use events::GameEvent;
pub use game_state::{Game, GameStatus};
pub use piece::{Piece, PieceCells, Placement};
pub use pieces::{get_shape, symmetry, variants, Variant};
pub use rng::SimpleRng;
pub use scoring::{line_clear_score, Progression};
pub use snapshot::{GameSnapshot, PieceSnapshot};
