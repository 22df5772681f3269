//! Run-time options read from environment variables.
//!
//! - `TETRIS_SEED`: RNG seed (u32). Defaults to a clock-derived seed.
//! - `TETRIS_LOG_PATH`: append a JSON-lines event log to this file.
//! - `TETRIS_NO_COLOR`: set to "1" or "true" to start with colours off.
//! - `TETRIS_HIDE_HELP`: set to "1" or "true" to start with the help hidden.
//! - `TETRIS_HIDE_NEXT`: set to "1" or "true" to start with the preview hidden.
//!
//! Game rules (board size, speeds, thresholds) are constants, not options.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub color: bool,
    pub show_help: bool,
    pub show_next: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            color: true,
            show_help: true,
            show_next: true,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            log_path,
            color: !is_set(lookup("TETRIS_NO_COLOR")),
            show_help: !is_set(lookup("TETRIS_HIDE_HELP")),
            show_next: !is_set(lookup("TETRIS_HIDE_NEXT")),
        }
    }

    /// The configured seed, or one derived from the system clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn is_set(value: Option<String>) -> bool {
    value
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> RunConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(config(&[]), RunConfig::default());
    }

    #[test]
    fn parses_seed_and_log_path() {
        let cfg = config(&[("TETRIS_SEED", " 42 "), ("TETRIS_LOG_PATH", "/tmp/events.jsonl")]);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.seed_or_clock(), 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/events.jsonl")));
    }

    #[test]
    fn ignores_bad_seed_and_blank_log_path() {
        let cfg = config(&[("TETRIS_SEED", "abc"), ("TETRIS_LOG_PATH", "  ")]);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn display_flags() {
        let cfg = config(&[
            ("TETRIS_NO_COLOR", "TRUE"),
            ("TETRIS_HIDE_HELP", "1"),
            ("TETRIS_HIDE_NEXT", "no"),
        ]);
        assert!(!cfg.color);
        assert!(!cfg.show_help);
        assert!(cfg.show_next);
    }
}
