//! Scheduler tests with a scripted command source and a manual clock

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tui_blocks::core::{Board, Game, GameEvent, GameSnapshot, Piece};
use tui_blocks::engine::{Clock, CommandSource, EventLog, Presenter, Session};
use tui_blocks::types::{Color, Command, Family};

#[derive(Clone)]
struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

enum Step {
    Key(Command),
    /// No input: the whole timeout elapses.
    Idle,
}

/// Replays steps, then quits.
struct ScriptedSource {
    steps: VecDeque<Step>,
    clock: ManualClock,
    timeouts: Vec<Duration>,
}

impl ScriptedSource {
    fn new(clock: &ManualClock, steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            clock: clock.clone(),
            timeouts: Vec::new(),
        }
    }
}

impl CommandSource for ScriptedSource {
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        self.timeouts.push(timeout);
        match self.steps.pop_front() {
            Some(Step::Key(cmd)) => Ok(Some(cmd)),
            Some(Step::Idle) => {
                self.clock.advance(timeout);
                Ok(None)
            }
            None => Ok(Some(Command::Quit)),
        }
    }
}

#[derive(Default)]
struct RecordingPresenter {
    frames: Vec<GameSnapshot>,
    events: Vec<Vec<GameEvent>>,
    display: Vec<Command>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, snapshot: &GameSnapshot, events: &[GameEvent]) -> Result<()> {
        self.frames.push(*snapshot);
        self.events.push(events.to_vec());
        Ok(())
    }

    fn apply_display(&mut self, command: Command) -> Result<()> {
        self.display.push(command);
        Ok(())
    }
}

fn line() -> Piece {
    Piece::new(Family::Line, Color::Cyan, 0)
}

fn line_game() -> Game {
    Game::with_pieces(1, Board::new(), line(), Piece::new(Family::Square, Color::Yellow, 0))
}

fn session(
    game: Game,
    steps: Vec<Step>,
) -> (Session<ScriptedSource, RecordingPresenter, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let source = ScriptedSource::new(&clock, steps);
    let s = Session::with_clock(game, source, RecordingPresenter::default(), clock.clone());
    (s, clock)
}

fn moved_count(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::PieceMoved { .. }))
        .count()
}

#[test]
fn idle_wait_is_bounded_by_gravity_deadline() {
    let (mut s, _clock) = session(line_game(), vec![Step::Idle, Step::Idle]);

    s.step().unwrap();
    assert_eq!(s.game().current().placement().y, 0);

    // Deadline passed during the idle wait: this step ticks first.
    s.step().unwrap();
    assert_eq!(s.game().current().placement().y, 1);

    assert_eq!(
        s.source().timeouts,
        vec![Duration::from_millis(1000), Duration::from_millis(1000)]
    );
}

#[test]
fn available_commands_are_drained_in_one_step() {
    let steps = vec![
        Step::Key(Command::MoveLeft),
        Step::Key(Command::MoveLeft),
        Step::Key(Command::Rotate),
        Step::Idle,
    ];
    let (mut s, _clock) = session(line_game(), steps);

    s.step().unwrap();

    let p = s.presenter();
    assert_eq!(p.frames.len(), 1);
    assert_eq!(moved_count(&p.events[0]), 3);
    assert_eq!(s.game().current().placement().x, 1);
    assert_eq!(s.game().current().rotation(), 1);

    // First wait uses the full interval; drain polls never block.
    let timeouts = &s.source().timeouts;
    assert_eq!(timeouts[0], Duration::from_millis(1000));
    assert!(timeouts[1..].iter().all(|t| t.is_zero()));
}

#[test]
fn overdue_tick_runs_before_buffered_input() {
    let (mut s, clock) = session(line_game(), vec![Step::Key(Command::MoveLeft), Step::Idle]);
    clock.advance(Duration::from_millis(1500));

    s.step().unwrap();

    let events = &s.presenter().events[0];
    let moves: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::PieceMoved { from, to, .. } => Some((from[0], to[0])),
            _ => None,
        })
        .collect();
    assert_eq!(moves.len(), 2);

    // Gravity (down) first, then the left move.
    let (from, to) = moves[0];
    assert_eq!((to.0, to.1), (from.0, from.1 + 1));
    let (from, to) = moves[1];
    assert_eq!((to.0, to.1), (from.0 - 1, from.1));
}

#[test]
fn display_toggles_go_to_presenter_only() {
    let steps = vec![
        Step::Key(Command::ToggleHelp),
        Step::Key(Command::ToggleColor),
        Step::Key(Command::ToggleNext),
        Step::Idle,
    ];
    let (mut s, _clock) = session(line_game(), steps);
    let before = s.game().snapshot();

    s.step().unwrap();

    assert_eq!(
        s.presenter().display,
        vec![Command::ToggleHelp, Command::ToggleColor, Command::ToggleNext]
    );
    assert_eq!(s.game().snapshot().board, before.board);
    assert_eq!(s.game().snapshot().current, before.current);
    assert_eq!(moved_count(&s.presenter().events[0]), 0);
}

#[test]
fn quit_stops_the_loop() {
    let steps = vec![
        Step::Key(Command::MoveRight),
        Step::Key(Command::Quit),
        Step::Key(Command::MoveLeft),
    ];
    let (mut s, _clock) = session(line_game(), steps);

    s.run().unwrap();

    assert!(!s.game().is_running());
    // Commands after quit are never read.
    assert_eq!(s.source().steps.len(), 1);

    let p = s.presenter();
    assert!(p.frames[0].running);
    assert!(!p.frames.last().unwrap().running);
    assert!(p.events.last().unwrap().contains(&GameEvent::GameOver));
}

#[test]
fn run_presents_initial_frame_with_spawn() {
    let (mut s, _clock) = session(line_game(), vec![]);

    s.run().unwrap();

    let first = &s.presenter().events[0];
    assert!(matches!(first[0], GameEvent::PieceSpawned { .. }));
}

#[test]
fn gravity_alone_lands_pieces() {
    // First wait reaches the deadline, 16 ticks reach the floor, the next lands.
    let steps: Vec<Step> = (0..18).map(|_| Step::Idle).collect();
    let (mut s, _clock) = session(line_game(), steps);

    for _ in 0..18 {
        s.step().unwrap();
    }

    assert_eq!(s.game().board().filled_count(), 4);
    assert_eq!(s.game().current().family(), Family::Square);
}

#[test]
fn event_log_records_every_event() {
    let path = std::env::temp_dir().join(format!(
        "tui-blocks-session-{}.jsonl",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let log = EventLog::open(&path).unwrap();
        let (s, _clock) = session(line_game(), vec![Step::Key(Command::Drop)]);
        let mut s = s.with_event_log(log);
        s.run().unwrap();
    }

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(records.len() > 3);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec["seq"], (i + 1) as u64);
    }
    assert_eq!(records[0]["type"], "piece_spawned");
    assert_eq!(records[0]["color"], "cyan");
    assert!(records.iter().any(|r| r["type"] == "piece_landed"));
    assert_eq!(records.last().unwrap()["type"], "game_over");
}
