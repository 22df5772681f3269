//! Terminal front end.
//!
//! Renders into a simple framebuffer of styled characters, then flushes the
//! changed runs to the terminal with crossterm. The playfield uses two columns
//! per board cell.
//!
//! - [`fb`]: framebuffer and palette styles
//! - [`game_view`]: pure layout from a snapshot
//! - [`flags`]: help / next / colour visibility
//! - [`renderer`]: raw mode, alternate screen and ANSI encoding
//! - [`presenter`]: the engine-facing [`Presenter`](tui_blocks_engine::Presenter)

pub mod fb;
pub mod flags;
pub mod game_view;
pub mod presenter;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use flags::{DisplayFlags, Toggle};
pub use game_view::{AnchorY, GameView, Viewport, HELP_TEXT, LAYOUT_HEIGHT, LAYOUT_WIDTH};
pub use presenter::TerminalPresenter;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
