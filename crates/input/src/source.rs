//! Keyboard as a [`CommandSource`].

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tui_blocks_engine::CommandSource;

use crate::map::map_key_event;
use crate::types::Command;

/// Reads key presses from the terminal via `crossterm::event`.
///
/// Expects raw mode to be enabled by the caller. Unmapped keys, key releases
/// and non-key events are skipped without resetting the deadline.
#[derive(Debug, Default)]
pub struct TerminalInput {
    keys_read: u64,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of key events that mapped to a command.
    pub fn keys_read(&self) -> u64 {
        self.keys_read
    }
}

impl CommandSource for TerminalInput {
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        let deadline = Instant::now() + timeout;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !event::poll(wait)? {
                return Ok(None);
            }

            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat counts as another press.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(command) = map_key_event(key) {
                    self.keys_read += 1;
                    return Ok(Some(command));
                }
            }
        }
    }
}
