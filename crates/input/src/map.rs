//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a command.
///
/// Letters are case-insensitive. Ctrl-C quits rather than toggling colour.
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(Command::MoveLeft),
            'd' => Some(Command::MoveRight),
            's' => Some(Command::Rotate),
            ' ' => Some(Command::Drop),
            'q' => Some(Command::Quit),
            'h' => Some(Command::ToggleHelp),
            'n' => Some(Command::ToggleNext),
            'c' => Some(Command::ToggleColor),
            _ => None,
        },
        _ => None,
    }
}
