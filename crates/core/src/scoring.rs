//! Scoring module - lines, score, level and gravity speed
//!
//! Rules:
//! - Clearing `n` lines at once adds `n` to the line count and `n * n` to the
//!   score (1, 4, 9, 16).
//! - When the score exceeds `LEVEL_UP_THRESHOLD * level`, the level rises by
//!   one and the gravity interval is multiplied by `DELAY_FACTOR`.
//! - The level-up check runs once per clear. A single large clear that jumps
//!   past several thresholds still raises the level by exactly one.

use std::time::Duration;

use crate::types::{DELAY_FACTOR, INITIAL_GRAVITY_MS, LEVEL_UP_THRESHOLD};

/// Score awarded for clearing `lines` rows in one landing.
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(lines)
}

/// Progression state, owned by the game controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    lines: u32,
    score: u32,
    level: u32,
    gravity_interval: Duration,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            lines: 0,
            score: 0,
            level: 1,
            gravity_interval: Duration::from_millis(INITIAL_GRAVITY_MS),
        }
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Time between gravity ticks at the current level.
    pub fn gravity_interval(&self) -> Duration {
        self.gravity_interval
    }

    /// Record a clear of `lines` rows. Returns true if the level went up.
    ///
    /// A zero-line clear changes nothing.
    pub fn apply_line_clear(&mut self, lines: u32) -> bool {
        if lines == 0 {
            return false;
        }

        self.lines = self.lines.saturating_add(lines);
        self.score = self.score.saturating_add(line_clear_score(lines));

        if self.score > LEVEL_UP_THRESHOLD.saturating_mul(self.level) {
            self.level += 1;
            self.gravity_interval = self.gravity_interval.mul_f64(DELAY_FACTOR);
            return true;
        }

        false
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
