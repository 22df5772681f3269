//! State-change notifications emitted by [`crate::Game`].
//!
//! Events are queued in the order the changes happen and drained by the
//! caller with [`crate::Game::take_events`]. They carry enough data for a
//! renderer to redraw incrementally, though a full snapshot is always
//! available as well.

use crate::board::BoardGrid;
use crate::piece::PieceCells;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new current piece entered the board at the spawn anchor.
    PieceSpawned { cells: PieceCells, color: Color },
    /// The current piece moved or rotated.
    PieceMoved {
        from: PieceCells,
        to: PieceCells,
        color: Color,
    },
    /// The current piece could not fall further and was flattened into the board.
    PieceLanded { cells: PieceCells, color: Color },
    /// Complete rows were removed; `board` is the grid after compaction.
    LinesCleared { count: u32, board: BoardGrid },
    ProgressionChanged { score: u32, level: u32, lines: u32 },
    /// Terminal transition (spawn blocked or quit).
    GameOver,
}

impl GameEvent {
    /// Short lowercase tag, used by event logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::PieceSpawned { .. } => "piece_spawned",
            GameEvent::PieceMoved { .. } => "piece_moved",
            GameEvent::PieceLanded { .. } => "piece_landed",
            GameEvent::LinesCleared { .. } => "lines_cleared",
            GameEvent::ProgressionChanged { .. } => "progression_changed",
            GameEvent::GameOver => "game_over",
        }
    }
}
