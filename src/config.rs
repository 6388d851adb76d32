//! Startup configuration
//!
//! Read once before the first tick. The arena is the window, so the window
//! size also fixes the play area for every run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Arena;

/// Why a configuration could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("window must be at least {min_width}x{min_height}, got {width}x{height}")]
    WindowTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("tick rate must be positive")]
    ZeroTickRate,
}

/// Window settings, applied once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    /// RNG seed; picked at startup when absent
    pub seed: Option<u64>,
    /// Frame pump cadence
    pub tick_rate_hz: u32,
    /// Stop the headless pump after this many ticks
    pub max_ticks: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            seed: None,
            tick_rate_hz: TICK_RATE_HZ,
            max_ticks: None,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject dimensions the simulation cannot run in.
    ///
    /// The player has to fit inside the arena for clamping to make sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_width = PLAYER_SIZE.x as u32;
        let min_height = PLAYER_SIZE.y as u32;
        if self.window.width < min_width || self.window.height < min_height {
            return Err(ConfigError::WindowTooSmall {
                width: self.window.width,
                height: self.window.height,
                min_width,
                min_height,
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.window.width, self.window.height)
    }
}
