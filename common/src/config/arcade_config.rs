use serde::{Deserialize, Serialize};

use crate::games::snake::{BoardMode, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
use super::Validate;

const MAX_GRID_SIZE: i32 = 100;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ArcadeConfig {
    pub game: GameConfig,
    pub watch: WatchConfig,
    pub api: ApiConfig,
}

impl Validate for ArcadeConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.watch.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: i32,
    pub mode: BoardMode,
    /// Host frame period driving the scheduler.
    pub frame_interval_ms: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            mode: BoardMode::Passthrough,
            frame_interval_ms: 16,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            ));
        }
        if self.frame_interval_ms == 0 || self.frame_interval_ms > 1000 {
            return Err(format!(
                "frame_interval_ms must be between 1 and 1000, got {}",
                self.frame_interval_ms
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WatchConfig {
    pub tick_interval_ms: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
        }
    }
}

impl Validate for WatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Watch tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Artificial delay added to every mock API call.
    pub latency_ms: u32,
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.latency_ms > 5000 {
            return Err("api latency_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}
