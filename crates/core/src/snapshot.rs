use std::time::Duration;

use crate::board::BoardGrid;
use crate::piece::{Piece, PieceCells};
use crate::types::{Color, Family, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub family: Family,
    pub color: Color,
    pub rotation: u8,
    pub cells: PieceCells,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            family: value.family(),
            color: value.color(),
            rotation: value.rotation(),
            cells: value.occupied_cells(),
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `next.cells` are relative to the 4x4 preview box (anchor at the origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub gravity_interval: Duration,
    pub running: bool,
}

impl GameSnapshot {
    /// Board cell with the current piece overlaid (while running).
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Color> {
        if x >= BOARD_WIDTH as usize || y >= BOARD_HEIGHT as usize {
            return None;
        }
        if self.running
            && self
                .current
                .cells
                .iter()
                .any(|&(cx, cy)| cx >= 0 && cy >= 0 && cx as usize == x && cy as usize == y)
        {
            return Some(self.current.color);
        }
        self.board[y][x]
    }
}
