//! Terminal runner (default binary).
//!
//! Wires the keyboard, the game and the terminal view together through the
//! engine's cooperative scheduler. Options come from `TETRIS_*` environment
//! variables (see `tui_blocks::engine::config`).

use std::io;

use anyhow::{bail, Result};
use crossterm::tty::IsTty;

use tui_blocks::core::Game;
use tui_blocks::engine::{EventLog, RunConfig, Session};
use tui_blocks::input::TerminalInput;
use tui_blocks::term::{DisplayFlags, TerminalPresenter, TerminalRenderer};

fn main() -> Result<()> {
    if !io::stdout().is_tty() {
        bail!("stdout is not a terminal");
    }

    let config = RunConfig::from_env();
    let seed = config.seed_or_clock();

    let log = match config.log_path.as_deref() {
        Some(path) => match EventLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[tui-blocks] event log disabled: {e:#}");
                None
            }
        },
        None => None,
    };

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let presenter = TerminalPresenter::new(renderer, DisplayFlags::from_config(&config));
    let mut session = Session::new(Game::new(seed), TerminalInput::new(), presenter);
    if let Some(log) = log {
        session = session.with_event_log(log);
    }

    let result = session.run();

    // Always try to restore terminal state.
    let _ = session.presenter_mut().renderer_mut().exit();

    let game = session.game();
    println!(
        "Game over! Score: {} Level: {} Lines: {}",
        game.score(),
        game.level(),
        game.lines()
    );
    if let Err(e) = &result {
        eprintln!("[tui-blocks] stopped on error (seed {seed}): {e:#}");
    }
    result
}
