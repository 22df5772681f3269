//! JSON-lines event log.
//!
//! One object per [`GameEvent`], e.g.
//!
//! ```text
//! {"seq":1,"type":"piece_spawned","cells":[[4,0],[4,1],[4,2],[4,3]],"color":"cyan"}
//! {"seq":2,"type":"lines_cleared","count":1,"board":["..........", ...]}
//! ```
//!
//! Board rows are strings, `.` for empty and the first letter of the colour
//! name for filled cells.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{BoardGrid, GameEvent, PieceCells};

/// Serialized form of one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub seq: u64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<PieceCells>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<PieceCells>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
}

impl EventRecord {
    pub fn new(seq: u64, event: &GameEvent) -> Self {
        let mut rec = Self {
            seq,
            kind: event.kind(),
            cells: None,
            from: None,
            color: None,
            count: None,
            board: None,
            score: None,
            level: None,
            lines: None,
        };

        match event {
            GameEvent::PieceSpawned { cells, color } | GameEvent::PieceLanded { cells, color } => {
                rec.cells = Some(*cells);
                rec.color = Some(color.as_str());
            }
            GameEvent::PieceMoved { from, to, color } => {
                rec.from = Some(*from);
                rec.cells = Some(*to);
                rec.color = Some(color.as_str());
            }
            GameEvent::LinesCleared { count, board } => {
                rec.count = Some(*count);
                rec.board = Some(board_rows(board));
            }
            GameEvent::ProgressionChanged {
                score,
                level,
                lines,
            } => {
                rec.score = Some(*score);
                rec.level = Some(*level);
                rec.lines = Some(*lines);
            }
            GameEvent::GameOver => {}
        }

        rec
    }
}

fn board_rows(board: &BoardGrid) -> Vec<String> {
    board
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(color) => color.as_str().chars().next().unwrap_or('#'),
                    None => '.',
                })
                .collect()
        })
        .collect()
}

/// Appends [`EventRecord`]s to a writer, one JSON object per line.
pub struct EventLog<W: Write = BufWriter<File>> {
    out: W,
    seq: u64,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, seq: 0 }
    }

    /// Number of records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, event: &GameEvent) -> Result<()> {
        self.seq += 1;
        let rec = EventRecord::new(self.seq, event);
        serde_json::to_writer(&mut self.out, &rec)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
