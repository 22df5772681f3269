//! Game state module - the controller that owns the whole game
//!
//! This module ties together the board, the current and next pieces, the
//! RNG and the progression. It is the only place that mutates them, and
//! every mutation is driven by a command or a gravity tick:
//!
//! - `tick` tries to move the current piece down one row. If it cannot, the
//!   piece is flattened, complete rows are cleared and scored, and the next
//!   piece is promoted (landing runs to completion in a single call).
//! - Moves and rotations that would collide are rejected and change nothing.
//! - A promoted piece that does not fit at the spawn anchor ends the game.

use std::time::Duration;

use crate::board::Board;
use crate::events::GameEvent;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::Progression;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Command, SPAWN_X, SPAWN_Y};

/// Controller state machine. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    progression: Progression,
    status: GameStatus,
    rng: SimpleRng,
    seed: u32,
    /// Pending notifications, oldest first.
    events: Vec<GameEvent>,
}

impl Game {
    /// Start a game on an empty board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start a game on a pre-filled board.
    ///
    /// The first piece is spawned immediately; if it does not fit, the game
    /// starts (and stays) in `GameOver`.
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Piece::random(&mut rng);
        let mut game = Self {
            board,
            current: next,
            next,
            progression: Progression::new(),
            status: GameStatus::Playing,
            rng,
            seed,
            events: Vec::new(),
        };
        game.spawn_current();
        game
    }

    /// Start a game with a chosen first piece and a chosen next piece.
    pub fn with_pieces(seed: u32, board: Board, first: Piece, next: Piece) -> Self {
        let mut game = Self {
            board,
            current: first,
            next: first,
            progression: Progression::new(),
            status: GameStatus::Playing,
            rng: SimpleRng::new(seed),
            seed,
            events: Vec::new(),
        };
        if game.spawn_current() {
            game.next = next;
        }
        game
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    /// Time between gravity ticks at the current level
    pub fn gravity_interval(&self) -> Duration {
        self.progression.gravity_interval()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Events queued since the last call to [`Game::take_events`].
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.grid(),
            current: PieceSnapshot::from(self.current),
            next: PieceSnapshot::from(self.next),
            score: self.progression.score(),
            level: self.progression.level(),
            lines: self.progression.lines(),
            gravity_interval: self.progression.gravity_interval(),
            running: self.is_running(),
        }
    }

    /// Promote the next piece to current at the spawn anchor and draw a new next piece.
    ///
    /// Returns false, and ends the game, if the promoted piece collides.
    pub fn spawn_current(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let mut piece = self.next;
        piece.set_anchor(SPAWN_X, SPAWN_Y);
        self.current = piece;

        let cells = piece.occupied_cells();
        if !self.board.is_valid_placement(&cells) {
            self.finish();
            return false;
        }

        self.events.push(GameEvent::PieceSpawned {
            cells,
            color: piece.color(),
        });
        self.next = Piece::random(&mut self.rng);
        true
    }

    /// Try to shift the current piece by `(dx, dy)` and rotate it by `dz` steps.
    ///
    /// Invalid placements are rejected with no state change.
    pub fn try_move(&mut self, dx: i8, dy: i8, dz: i8) -> bool {
        if !self.is_running() {
            return false;
        }

        let placement = self.current.candidate(dx, dy, dz);
        let to = self.current.occupied_cells_at(placement);
        if !self.board.is_valid_placement(&to) {
            return false;
        }

        let from = self.current.occupied_cells();
        self.current.commit(placement);
        self.events.push(GameEvent::PieceMoved {
            from,
            to,
            color: self.current.color(),
        });
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0, 0)
    }

    pub fn rotate(&mut self) -> bool {
        self.try_move(0, 0, 1)
    }

    /// Gravity step: move down one row, or land the piece.
    ///
    /// Returns true if the piece fell, false if it landed (or the game is over).
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.try_move(0, 1, 0) {
            return true;
        }
        self.land();
        false
    }

    /// Hard drop: tick until the piece lands. Returns the rows fallen.
    pub fn drop_piece(&mut self) -> u32 {
        let mut rows = 0;
        while self.tick() {
            rows += 1;
        }
        rows
    }

    /// End the game. Only the first call has an effect.
    pub fn quit(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.finish();
        true
    }

    /// Apply a player command
    ///
    /// Returns true if the game state changed. Display toggles never change
    /// game state; the caller forwards them to the renderer.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::Drop => {
                if !self.is_running() {
                    return false;
                }
                self.drop_piece();
                true
            }
            Command::Quit => self.quit(),
            Command::ToggleHelp | Command::ToggleNext | Command::ToggleColor => false,
        }
    }

    /// Flatten the current piece, clear and score rows, then spawn the next piece.
    fn land(&mut self) {
        let piece = self.current;
        let flattened = self.board.flatten(&piece);
        debug_assert!(flattened, "current piece always sits on empty cells");

        self.events.push(GameEvent::PieceLanded {
            cells: piece.occupied_cells(),
            color: piece.color(),
        });

        let cleared = self.board.clear_complete_lines() as u32;
        if cleared > 0 {
            self.events.push(GameEvent::LinesCleared {
                count: cleared,
                board: self.board.grid(),
            });
            self.progression.apply_line_clear(cleared);
            self.events.push(GameEvent::ProgressionChanged {
                score: self.progression.score(),
                level: self.progression.level(),
                lines: self.progression.lines(),
            });
        }

        self.spawn_current();
    }

    fn finish(&mut self) {
        self.status = GameStatus::GameOver;
        self.events.push(GameEvent::GameOver);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
