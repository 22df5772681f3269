//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and exposes the
//! keyboard as an engine [`CommandSource`](tui_blocks_engine::CommandSource).

pub mod map;
pub mod source;

pub use tui_blocks_types as types;

pub use map::map_key_event;
pub use source::TerminalInput;
