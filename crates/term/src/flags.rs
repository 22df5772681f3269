//! Presentation flags flipped by the display toggle commands.

use tui_blocks_engine::RunConfig;

use crate::types::Command;

/// An on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle(bool);

impl Toggle {
    pub const fn new(on: bool) -> Self {
        Self(on)
    }

    pub fn is_on(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

/// What the view draws besides the playfield and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub help: Toggle,
    pub next: Toggle,
    pub color: Toggle,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            help: Toggle::new(true),
            next: Toggle::new(true),
            color: Toggle::new(true),
        }
    }
}

impl DisplayFlags {
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            help: Toggle::new(config.show_help),
            next: Toggle::new(config.show_next),
            color: Toggle::new(config.color),
        }
    }

    /// Flip the flag named by a display toggle. Other commands are ignored
    /// and return `false`.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleHelp => self.help.toggle(),
            Command::ToggleNext => self.next.toggle(),
            Command::ToggleColor => self.color.toggle(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores() {
        let mut t = Toggle::new(true);
        t.toggle();
        assert!(!t.is_on());
        t.toggle();
        assert!(t.is_on());
    }

    #[test]
    fn apply_flips_only_named_flag() {
        let mut flags = DisplayFlags::default();
        assert!(flags.apply(Command::ToggleNext));
        assert!(flags.help.is_on());
        assert!(!flags.next.is_on());
        assert!(flags.color.is_on());

        assert!(!flags.apply(Command::Drop));
        assert!(!flags.next.is_on());
    }

    #[test]
    fn from_config_respects_startup_options() {
        let config = RunConfig {
            color: false,
            show_help: false,
            ..RunConfig::default()
        };
        let flags = DisplayFlags::from_config(&config);
        assert!(!flags.color.is_on());
        assert!(!flags.help.is_on());
        assert!(flags.next.is_on());
    }
}
