//! Platform abstraction layer
//!
//! Adapters between whatever hosts the game and the pure simulation:
//! - Time: monotonic and fixed-step clock sources
//! - Input: turning raw "held" polls into held + newly-pressed sets

pub mod input;
pub mod time;

pub use input::InputTracker;
pub use time::{Clock, FixedStepClock, MonotonicClock};
