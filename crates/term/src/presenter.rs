//! Engine [`Presenter`] backed by the terminal.

use anyhow::Result;
use tui_blocks_engine::Presenter;

use crate::core::{GameEvent, GameSnapshot};
use crate::fb::FrameBuffer;
use crate::flags::DisplayFlags;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Command;

/// Redraws the whole layout after every scheduler step.
///
/// Keeps the last snapshot so a display toggle can redraw immediately.
pub struct TerminalPresenter {
    renderer: TerminalRenderer,
    view: GameView,
    flags: DisplayFlags,
    fb: FrameBuffer,
    last: Option<GameSnapshot>,
}

impl TerminalPresenter {
    pub fn new(renderer: TerminalRenderer, flags: DisplayFlags) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            flags,
            fb: FrameBuffer::new(0, 0),
            last: None,
        }
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }

    fn redraw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snap, self.flags, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, snapshot: &GameSnapshot, _events: &[GameEvent]) -> Result<()> {
        self.last = Some(*snapshot);
        self.redraw(snapshot)
    }

    fn apply_display(&mut self, command: Command) -> Result<()> {
        if !self.flags.apply(command) {
            return Ok(());
        }
        match self.last {
            Some(snap) => self.redraw(&snap),
            None => Ok(()),
        }
    }
}
