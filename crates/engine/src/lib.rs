//! Engine module - drives a [`Game`](tui_blocks_core::Game) in real time.
//!
//! The core has no clock and performs no I/O. This crate supplies the loop
//! around it:
//!
//! - [`scheduler`]: the single-threaded cooperative loop interleaving gravity
//!   ticks with commands, plus the [`CommandSource`] / [`Presenter`] seams the
//!   terminal layer plugs into
//! - [`config`]: run-time options from environment variables
//! - [`event_log`]: optional JSON-lines record of every game event
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use anyhow::Result;
//! use tui_blocks_core::{Game, GameEvent, GameSnapshot};
//! use tui_blocks_engine::{CommandSource, Presenter, Session};
//! use tui_blocks_types::Command;
//!
//! struct QuitAtOnce;
//!
//! impl CommandSource for QuitAtOnce {
//!     fn poll_command(&mut self, _timeout: Duration) -> Result<Option<Command>> {
//!         Ok(Some(Command::Quit))
//!     }
//! }
//!
//! struct Silent;
//!
//! impl Presenter for Silent {
//!     fn present(&mut self, _snap: &GameSnapshot, _events: &[GameEvent]) -> Result<()> {
//!         Ok(())
//!     }
//!     fn apply_display(&mut self, _command: Command) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut session = Session::new(Game::new(1), QuitAtOnce, Silent);
//! session.run().unwrap();
//! assert!(!session.game().is_running());
//! ```

pub mod config;
pub mod event_log;
pub mod scheduler;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use config::RunConfig;
pub use event_log::{EventLog, EventRecord};
pub use scheduler::{Clock, CommandSource, GravityTimer, Presenter, Session, SystemClock};
