//! Watch mode: animates remote AI players on their own clock.
//!
//! Each watched player runs the regular transition engine with the bot as
//! its input source. The session is independent from the main game: its own
//! state, RNG, interval and pending frame.

use std::time::Duration;

use crate::LivePlayerId;
use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotController;
use super::game_state::{GameState, TickEvent};
use super::scheduler::{Clock, FrameHandle, FrameOutcome, FrameSlot};
use super::snake::Snake;
use super::types::{BoardMode, GameStatus, GridSize, Position};

pub const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LivePlayer {
    pub id: LivePlayerId,
    pub username: String,
    pub state: GameState,
    /// Games played since the feed started, counting the current one.
    pub round: u32,
    spawn: GameState,
}

impl LivePlayer {
    pub fn new(
        id: LivePlayerId,
        username: impl Into<String>,
        mode: BoardMode,
        snake: impl IntoIterator<Item = Position>,
        food: Position,
        score: u32,
    ) -> Self {
        let state = GameState {
            snake: Snake::new(snake),
            food,
            score,
            status: GameStatus::Playing,
            ..GameState::initial(mode)
        };
        Self {
            id,
            username: username.into(),
            spawn: state.clone(),
            state,
            round: 1,
        }
    }

    /// One bot-driven tick. A player that dies starts a new round from its
    /// spawn layout with the score cleared.
    pub fn step(&self, grid: GridSize, rng: &mut SessionRng) -> (LivePlayer, TickEvent) {
        let Some(direction) = BotController::choose_direction(&self.state.snake, self.state.food, rng)
        else {
            return (self.clone(), TickEvent::Skipped);
        };

        let steered = GameState {
            next_direction: direction,
            ..self.state.clone()
        };
        let transition = steered.advance(grid, rng);

        if transition.state.status == GameStatus::GameOver {
            log!(
                "{} finished round {} with {} points, respawning",
                self.username,
                self.round,
                transition.state.score
            );
            let respawned = LivePlayer {
                state: GameState {
                    score: 0,
                    ..self.spawn.clone()
                },
                round: self.round + 1,
                ..self.clone()
            };
            return (respawned, transition.event);
        }

        let next = LivePlayer {
            state: transition.state,
            ..self.clone()
        };
        (next, transition.event)
    }
}

pub struct WatchSession<C: Clock> {
    players: Vec<LivePlayer>,
    selected: Option<usize>,
    grid: GridSize,
    interval: Duration,
    clock: C,
    rng: SessionRng,
    last_tick: Duration,
    frames: FrameSlot,
}

impl<C: Clock> WatchSession<C> {
    pub fn new(
        players: Vec<LivePlayer>,
        grid: GridSize,
        interval: Duration,
        clock: C,
        rng: SessionRng,
    ) -> Self {
        Self {
            players,
            selected: None,
            grid,
            interval,
            clock,
            rng,
            last_tick: Duration::ZERO,
            frames: FrameSlot::default(),
        }
    }

    pub fn players(&self) -> &[LivePlayer] {
        &self.players
    }

    pub fn selected(&self) -> Option<&LivePlayer> {
        self.selected.map(|index| &self.players[index])
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.pending()
    }

    pub fn is_running(&self) -> bool {
        self.frames.pending().is_some()
    }

    /// Starts animating `id`. Returns `false` for an unknown player, leaving
    /// the current selection untouched.
    pub fn select(&mut self, id: &LivePlayerId) -> bool {
        let Some(index) = self.players.iter().position(|p| &p.id == id) else {
            return false;
        };
        self.frames.cancel();
        self.selected = Some(index);
        self.last_tick = self.clock.now();
        self.frames.arm();
        log!("Watching {}", self.players[index].username);
        true
    }

    pub fn clear_selection(&mut self) {
        self.frames.cancel();
        self.selected = None;
    }

    pub fn teardown(&mut self) {
        self.clear_selection();
    }

    pub fn on_frame(&mut self, handle: FrameHandle) -> FrameOutcome {
        if !self.frames.take(handle) {
            return FrameOutcome::Stale;
        }
        let Some(index) = self.selected else {
            return FrameOutcome::Stale;
        };

        let now = self.clock.now();
        if now.saturating_sub(self.last_tick) < self.interval {
            self.frames.arm();
            return FrameOutcome::Waiting;
        }

        let (next, event) = self.players[index].step(self.grid, &mut self.rng);
        self.players[index] = next;
        self.last_tick = now;
        self.frames.arm();
        FrameOutcome::Ticked(event)
    }
}
