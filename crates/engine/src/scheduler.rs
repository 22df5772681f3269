//! Cooperative game loop.
//!
//! One actor owns the [`Game`] and alternates between two waits: for the
//! next command (bounded by the time left until the next gravity tick) and
//! for the tick itself. Whichever comes first runs to completion before the
//! loop waits again.
//!
//! Ordering within one [`Session::step`]:
//! 1. If the gravity deadline has passed, tick once and restart the timer.
//! 2. Wait for a command for at most the time remaining until the next tick.
//! 3. If one arrived, apply it, then drain every command that is already
//!    available (zero timeout) before returning.
//! 4. Hand the queued events and a fresh snapshot to the presenter.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{Game, GameEvent, GameSnapshot};
use crate::event_log::EventLog;
use crate::types::Command;

/// Source of abstract commands (keyboard, script, network...).
pub trait CommandSource {
    /// Wait up to `timeout` for the next command.
    ///
    /// `Ok(None)` means the timeout expired with no input. A zero timeout
    /// must not block.
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>>;
}

/// Rendering collaborator.
pub trait Presenter {
    /// Show the state after a step, with the events that led to it.
    fn present(&mut self, snapshot: &GameSnapshot, events: &[GameEvent]) -> Result<()>;

    /// Apply a display toggle (help, next-piece preview, colour).
    fn apply_display(&mut self, command: Command) -> Result<()>;
}

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Tracks when the last gravity tick happened.
#[derive(Debug, Clone, Copy)]
pub struct GravityTimer {
    last_tick: Instant,
}

impl GravityTimer {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Time left until the next tick is due (zero if overdue).
    pub fn remaining(&self, now: Instant, interval: Duration) -> Duration {
        interval.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub fn is_due(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.last_tick) >= interval
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

/// A running game wired to its collaborators.
pub struct Session<S, P, C = SystemClock> {
    game: Game,
    source: S,
    presenter: P,
    clock: C,
    timer: GravityTimer,
    log: Option<EventLog>,
}

impl<S, P> Session<S, P, SystemClock>
where
    S: CommandSource,
    P: Presenter,
{
    pub fn new(game: Game, source: S, presenter: P) -> Self {
        Self::with_clock(game, source, presenter, SystemClock)
    }
}

impl<S, P, C> Session<S, P, C>
where
    S: CommandSource,
    P: Presenter,
    C: Clock,
{
    pub fn with_clock(game: Game, source: S, presenter: P, clock: C) -> Self {
        let timer = GravityTimer::new(clock.now());
        Self {
            game,
            source,
            presenter,
            clock,
            timer,
            log: None,
        }
    }

    /// Record every event to `log`.
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Run until the game ends.
    ///
    /// The initial frame is presented before the first wait, and the final
    /// (game over) frame after the last step.
    pub fn run(&mut self) -> Result<()> {
        self.timer.reset(self.clock.now());
        self.flush()?;
        while self.game.is_running() {
            self.step()?;
        }
        Ok(())
    }

    /// One scheduler cycle.
    pub fn step(&mut self) -> Result<()> {
        let now = self.clock.now();
        if self.timer.is_due(now, self.game.gravity_interval()) {
            self.game.tick();
            self.timer.reset(now);
        }

        if self.game.is_running() {
            let timeout = self
                .timer
                .remaining(self.clock.now(), self.game.gravity_interval());
            if let Some(command) = self.source.poll_command(timeout)? {
                self.dispatch(command)?;
                while self.game.is_running() {
                    match self.source.poll_command(Duration::ZERO)? {
                        Some(command) => self.dispatch(command)?,
                        None => break,
                    }
                }
            }
        }

        self.flush()
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        if command.is_display_toggle() {
            return self.presenter.apply_display(command);
        }
        self.game.apply(command);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let events = self.game.take_events();
        if let Some(log) = self.log.as_mut() {
            for event in &events {
                log.record(event)?;
            }
            log.flush()?;
        }
        self.presenter.present(&self.game.snapshot(), &events)
    }
}
