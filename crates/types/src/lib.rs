//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the game core, the terminal layer, and the scheduler alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: `((W - 4) / 2, 0)` = (3, 0)
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_GRAVITY_MS` | 1000 | Gravity interval at level 1 |
//! | `LEVEL_UP_THRESHOLD` | 20 | Level rises once score exceeds `20 * level` |
//! | `DELAY_FACTOR` | 0.8 | Gravity interval multiplier per level-up |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Command, Family, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let family = Family::from_str("t").unwrap();
//! assert_eq!(family, Family::T);
//!
//! let command = Command::from_str("moveLeft").unwrap();
//! assert_eq!(command, Command::MoveLeft);
//! assert!(!command.is_display_toggle());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the box every shape variant fits in.
pub const SHAPE_BOX: u8 = 4;

/// Spawn anchor column, centering the 4x4 shape box.
pub const SPAWN_X: i8 = ((BOARD_WIDTH - SHAPE_BOX) / 2) as i8;

/// Spawn anchor row.
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at the start of a game (1 second per row)
pub const INITIAL_GRAVITY_MS: u64 = 1000;

/// Score multiple of the current level that must be exceeded to level up
pub const LEVEL_UP_THRESHOLD: u32 = 20;

/// Gravity interval multiplier applied on every level-up
pub const DELAY_FACTOR: f64 = 0.8;

/// The seven piece families.
///
/// Declaration order matches the shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 2x2 block
    Square,
    /// Straight line (I)
    Line,
    S,
    Z,
    L,
    /// Mirrored L
    J,
    T,
}

impl Family {
    /// All families, in shape table order.
    pub const ALL: [Family; 7] = [
        Family::Square,
        Family::Line,
        Family::S,
        Family::Z,
        Family::L,
        Family::J,
        Family::T,
    ];

    /// Parse family from string
    ///
    /// Accepts the canonical letter or the long name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Family;
    ///
    /// assert_eq!(Family::from_str("o"), Some(Family::Square));
    /// assert_eq!(Family::from_str("Line"), Some(Family::Line));
    /// assert_eq!(Family::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" | "square" => Some(Family::Square),
            "i" | "line" => Some(Family::Line),
            "s" => Some(Family::S),
            "z" => Some(Family::Z),
            "l" => Some(Family::L),
            "j" => Some(Family::J),
            "t" => Some(Family::T),
            _ => None,
        }
    }

    /// Canonical single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Square => "o",
            Family::Line => "i",
            Family::S => "s",
            Family::Z => "z",
            Family::L => "l",
            Family::J => "j",
            Family::T => "t",
        }
    }
}

/// Cell colours (the 7-colour palette).
///
/// Discriminants follow the ANSI colour numbers used for `ESC[3Nm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Fuchsia = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Fuchsia,
        Color::Cyan,
        Color::White,
    ];

    /// ANSI colour number (1-7)
    pub fn ansi_code(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Fuchsia => "fuchsia",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a landed piece of that colour
pub type Cell = Option<Color>;

/// Abstract player commands.
///
/// Raw key decoding happens outside the core; the core only sees these.
/// Gravity ticks are not commands, the scheduler drives them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next rotation variant
    Rotate,
    /// Drop the piece until it lands
    Drop,
    /// End the game
    Quit,
    ToggleHelp,
    ToggleNext,
    ToggleColor,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Command;
    ///
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("toggleColor"), Some(Command::ToggleColor));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "drop" => Some(Command::Drop),
            "quit" => Some(Command::Quit),
            "togglehelp" => Some(Command::ToggleHelp),
            "togglenext" => Some(Command::ToggleNext),
            "togglecolor" => Some(Command::ToggleColor),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::Drop => "drop",
            Command::Quit => "quit",
            Command::ToggleHelp => "toggleHelp",
            Command::ToggleNext => "toggleNext",
            Command::ToggleColor => "toggleColor",
        }
    }

    /// Whether the command only affects presentation.
    pub fn is_display_toggle(&self) -> bool {
        matches!(
            self,
            Command::ToggleHelp | Command::ToggleNext | Command::ToggleColor
        )
    }
}
