mod bot_controller;
mod game_state;
mod input;
mod scheduler;
mod snake;
mod types;
mod watch;

pub use bot_controller::BotController;
pub use game_state::{
    FOOD_SCORE, GameState, INITIAL_SPEED_MS, MIN_GRID_SIZE, MIN_SPEED_MS, SPEED_STEP_MS, TickEvent,
    Transition, place_food,
};
pub use input::{DirectionRejected, InputCommand, Key, buffer_direction, map_key};
pub use scheduler::{
    Clock, FrameHandle, FrameOutcome, ManualClock, MonotonicClock, ScoreReporter, SessionGate,
    TickScheduler,
};
pub use snake::Snake;
pub use types::{BoardMode, DEFAULT_GRID_SIZE, Direction, GameStatus, GridSize, Position};
pub use watch::{DEFAULT_WATCH_INTERVAL, LivePlayer, WatchSession};
