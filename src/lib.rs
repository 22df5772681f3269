//! Terminal falling-block game (workspace facade crate).
//!
//! Re-exports the member crates under short names:
//! `tui_blocks::{core, engine, input, term, types}`.

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
