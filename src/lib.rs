//! Mine Dash - a small arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, scenes)
//! - `platform`: Input edge detection and clock sources
//! - `config`: Startup configuration (window/arena size, seed)
//! - `ui`: Read-only helpers for whatever draws the frame

pub mod config;
pub mod platform;
pub mod sim;
pub mod ui;

pub use config::{Config, ConfigError};
pub use sim::{Flow, Game};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    use glam::IVec2;

    /// Reference arena dimensions (matches the default window)
    pub const ARENA_WIDTH: u32 = 640;
    pub const ARENA_HEIGHT: u32 = 480;

    /// Default window title
    pub const WINDOW_TITLE: &str = "Mine Dash";

    /// Frame pump cadence (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Logical entity sizes (collision and clamping only, not sprites)
    pub const PLAYER_SIZE: IVec2 = IVec2::new(20, 20);
    pub const FOOD_SIZE: IVec2 = IVec2::new(5, 5);
    pub const MINE_SIZE: IVec2 = IVec2::new(5, 5);

    /// Player speed in pixels per tick, applied per axis
    pub const PLAYER_SPEED: f32 = 6.0;

    /// Length of a single run
    pub const RUN_DURATION: Duration = Duration::from_secs(60);
    /// One more mine becomes due every this many whole seconds
    pub const MINE_INTERVAL_SECS: u64 = 10;
}
