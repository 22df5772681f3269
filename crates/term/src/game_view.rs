//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (columns x rows, relative to the layout origin):
//!
//! ```text
//! 0          13               27 29                  49       57
//! Lines completed: 0          <| . . . . . . . . . .|>        Use cursor keys
//! Level:           1          <| . . . . . . . . . .|>             or
//! Score:           0          ...
//!              [][]            ...
//!              [][]           <| . . . . . . . . . .|>
//!                               ====================
//!                               \/\/\/\/\/\/\/\/\/\/
//! Game over!
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::flags::DisplayFlags;
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

pub const LAYOUT_WIDTH: u16 = HELP_X + 19;
pub const LAYOUT_HEIGHT: u16 = GAMEOVER_Y + 1;

const PLAYFIELD_X: u16 = 29;
const PLAYFIELD_Y: u16 = 0;
const HELP_X: u16 = 57;
const HELP_Y: u16 = 0;
const SCORE_X: u16 = 0;
const SCORE_Y: u16 = 1;
const NEXT_X: u16 = 13;
const NEXT_Y: u16 = 10;
const GAMEOVER_X: u16 = 0;
const GAMEOVER_Y: u16 = PLAYFIELD_Y + BOARD_HEIGHT as u16 + 2;

const EMPTY_CELL: &str = " .";
const FILLED_CELL: &str = "[]";

const BORDER_COLOR: Color = Color::Yellow;
const HELP_COLOR: Color = Color::Cyan;
const SCORE_COLOR: Color = Color::Green;

pub const HELP_TEXT: [&str; 9] = [
    "  Use cursor keys",
    "       or",
    "    s: rotate",
    "a: left,  d: right",
    "    space: drop",
    "      q: quit",
    "  c: toggle color",
    "n: toggle show next",
    "h: toggle this help",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws the playfield, score, help and next-piece panels.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the layout inside `viewport`. Centred horizontally;
    /// a viewport smaller than the layout clips on the right/bottom.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(LAYOUT_WIDTH) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(LAYOUT_HEIGHT) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        flags: DisplayFlags,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (ox, oy) = self.origin(viewport);
        let ink = |style: CellStyle| {
            if flags.color.is_on() {
                style
            } else {
                style.monochrome()
            }
        };

        self.draw_score(fb, snap, ox, oy, ink(CellStyle::fg(SCORE_COLOR)));

        if flags.help.is_on() {
            let style = ink(CellStyle::fg(HELP_COLOR).bold());
            for (i, line) in HELP_TEXT.iter().enumerate() {
                fb.put_str(ox + HELP_X, oy + HELP_Y + i as u16, line, style);
            }
        }

        if flags.next.is_on() {
            let style = ink(CellStyle::solid(snap.next.color));
            for &(cx, cy) in snap.next.cells.iter() {
                fb.put_str(
                    ox + NEXT_X + cx as u16 * 2,
                    oy + NEXT_Y + cy as u16,
                    FILLED_CELL,
                    style,
                );
            }
        }

        for y in 0..BOARD_HEIGHT as usize {
            let py = oy + PLAYFIELD_Y + y as u16;
            let mut px = ox + PLAYFIELD_X;
            for x in 0..BOARD_WIDTH as usize {
                let (text, style) = match snap.cell_at(x, y) {
                    Some(color) => (FILLED_CELL, ink(CellStyle::solid(color))),
                    None => (EMPTY_CELL, CellStyle::PLAIN),
                };
                px = fb.put_str(px, py, text, style);
            }
        }

        self.draw_border(fb, ox, oy, ink(CellStyle::fg(BORDER_COLOR).bold()));

        if !snap.running {
            fb.put_str(ox + GAMEOVER_X, oy + GAMEOVER_Y, "Game over!", CellStyle::PLAIN.bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, flags: DisplayFlags, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, flags, viewport, &mut fb);
        fb
    }

    fn draw_score(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ox: u16, oy: u16, style: CellStyle) {
        let rows = [
            ("Lines completed: ", snap.lines),
            ("Level:           ", snap.level),
            ("Score:           ", snap.score),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            let y = oy + SCORE_Y + i as u16;
            let x = fb.put_str(ox + SCORE_X, y, label, style);
            fb.put_u32(x, y, value, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, style: CellStyle) {
        let left = ox + PLAYFIELD_X - 2;
        let right = ox + PLAYFIELD_X + BOARD_WIDTH as u16 * 2;
        for y in 0..BOARD_HEIGHT as u16 {
            fb.put_str(left, oy + PLAYFIELD_Y + y, "<|", style);
            fb.put_str(right, oy + PLAYFIELD_Y + y, "|>", style);
        }

        for (i, pair) in ["==", "\\/"].into_iter().enumerate() {
            let y = oy + PLAYFIELD_Y + BOARD_HEIGHT as u16 + i as u16;
            let mut x = ox + PLAYFIELD_X;
            for _ in 0..BOARD_WIDTH {
                x = fb.put_str(x, y, pair, style);
            }
        }
    }
}
