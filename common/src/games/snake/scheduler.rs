//! Frame-driven game loop around the transition engine.
//!
//! The host calls [`TickScheduler::on_frame`] with the handle returned by
//! [`TickScheduler::pending_frame`] on every frame (render callback, tokio
//! interval, test loop). The scheduler advances the game once the current
//! speed has elapsed since the last accepted tick. Leaving the playing state
//! drops the pending handle, so a callback that was already queued becomes a
//! no-op instead of a late tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::games::SessionRng;
use crate::log;
use super::game_state::{GameState, TickEvent};
use super::input::{self, DirectionRejected, InputCommand};
use super::types::{BoardMode, Direction, GameStatus, GridSize};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock; clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now_ms.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn set(&self, at: Duration) {
        self.now_ms.store(at.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.now_ms.load(Ordering::SeqCst))
    }
}

/// Receives the final score of a session. Fire and forget.
pub trait ScoreReporter: Send {
    fn report(&mut self, score: u32, mode: BoardMode);
}

/// Whether a finished score may be recorded for the current identity.
pub trait SessionGate: Send {
    fn is_recording_allowed(&self) -> bool;
}

/// Token for the single pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// At most one outstanding frame request.
#[derive(Debug, Default)]
pub(crate) struct FrameSlot {
    pending: Option<FrameHandle>,
    issued: u64,
}

impl FrameSlot {
    pub(crate) fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub(crate) fn arm(&mut self) {
        self.issued += 1;
        self.pending = Some(FrameHandle(self.issued));
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consumes the pending request when `handle` matches it.
    pub(crate) fn take(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The handle was cancelled or already consumed.
    Stale,
    /// Not enough time since the last tick; a new frame is pending.
    Waiting,
    Ticked(TickEvent),
}

pub struct TickScheduler<C: Clock> {
    state: GameState,
    grid: GridSize,
    clock: C,
    rng: SessionRng,
    /// `None` until the first tick after a start or resume.
    last_tick: Option<Duration>,
    frames: FrameSlot,
    tick_count: u64,
    reporter: Option<Box<dyn ScoreReporter>>,
    reported: bool,
}

impl<C: Clock> TickScheduler<C> {
    pub fn new(mode: BoardMode, grid: GridSize, clock: C, rng: SessionRng) -> Self {
        Self {
            state: GameState::initial(mode),
            grid,
            clock,
            rng,
            last_tick: None,
            frames: FrameSlot::default(),
            tick_count: 0,
            reporter: None,
            reported: false,
        }
    }

    pub fn with_reporter(mut self, reporter: impl ScoreReporter + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.pending()
    }

    pub fn is_running(&self) -> bool {
        self.frames.pending().is_some()
    }

    pub fn start(&mut self) {
        self.state = GameState {
            status: GameStatus::Playing,
            ..GameState::initial(self.state.mode)
        };
        self.reported = false;
        self.tick_count = 0;
        self.last_tick = None;
        self.arm();
        log!("Game started in {} mode (seed {})", self.state.mode, self.rng.seed());
    }

    /// Playing <-> Paused. Does nothing from Idle or GameOver.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Playing => {
                self.state.status = GameStatus::Paused;
                self.cancel();
                log!("Game paused at score {}", self.state.score);
            }
            GameStatus::Paused => {
                self.state.status = GameStatus::Playing;
                self.last_tick = None;
                self.arm();
                log!("Game resumed");
            }
            GameStatus::Idle | GameStatus::GameOver => {}
        }
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.state = GameState::initial(self.state.mode);
        self.tick_count = 0;
        log!("Game reset");
    }

    /// Discards the current game, in progress or not.
    pub fn set_mode(&mut self, mode: BoardMode) {
        self.cancel();
        self.state = GameState::initial(mode);
        self.tick_count = 0;
        log!("Mode changed to {}", mode);
    }

    pub fn teardown(&mut self) {
        self.cancel();
    }

    pub fn request_direction(&mut self, direction: Direction) -> Result<(), DirectionRejected> {
        self.state = input::buffer_direction(&self.state, direction)?;
        Ok(())
    }

    pub fn handle(&mut self, command: InputCommand) {
        match command {
            InputCommand::Turn(direction) => {
                // Rejected turns are part of normal play.
                let _ = self.request_direction(direction);
            }
            InputCommand::StartOrPause => match self.state.status {
                GameStatus::Idle | GameStatus::GameOver => self.start(),
                GameStatus::Playing | GameStatus::Paused => self.toggle_pause(),
            },
            InputCommand::Reset => self.reset(),
        }
    }

    pub fn on_frame(&mut self, handle: FrameHandle) -> FrameOutcome {
        if !self.frames.take(handle) {
            return FrameOutcome::Stale;
        }

        let now = self.clock.now();
        let interval = Duration::from_millis(u64::from(self.state.speed_ms));
        if let Some(last_tick) = self.last_tick
            && now.saturating_sub(last_tick) < interval
        {
            self.arm();
            return FrameOutcome::Waiting;
        }

        let transition = self.state.advance(self.grid, &mut self.rng);
        // Drift-free but no catch-up: the next interval starts now.
        self.last_tick = Some(now);
        self.tick_count += 1;
        self.state = transition.state;

        match transition.event {
            TickEvent::AteFood => log!(
                "Ate food at {}, score {}, speed {}ms",
                self.state.snake.head(),
                self.state.score,
                self.state.speed_ms
            ),
            TickEvent::WallCollision => log!("Hit the wall at tick {}", self.tick_count),
            TickEvent::SelfCollision => log!("Ran into itself at tick {}", self.tick_count),
            TickEvent::BoardFilled => log!("Board filled at tick {}", self.tick_count),
            TickEvent::Moved | TickEvent::Skipped => {}
        }

        if self.state.is_playing() {
            self.arm();
        } else {
            self.finish();
        }
        FrameOutcome::Ticked(transition.event)
    }

    fn finish(&mut self) {
        self.cancel();
        log!(
            "Game over: score {} in {} mode after {} ticks",
            self.state.score,
            self.state.mode,
            self.tick_count
        );
        if self.reported || self.state.score == 0 {
            return;
        }
        self.reported = true;
        if let Some(reporter) = self.reporter.as_mut() {
            reporter.report(self.state.score, self.state.mode);
        }
    }

    fn arm(&mut self) {
        self.frames.arm();
    }

    fn cancel(&mut self) {
        self.frames.cancel();
    }
}
