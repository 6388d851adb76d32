//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as a value, never read from a global clock
//! - Seeded RNG only, threaded through explicitly
//! - Stable iteration order (mines in spawn order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod input;
pub mod movement;
pub mod scene;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, contains};
pub use input::{Keys, TickInput};
pub use movement::movement_delta;
pub use scene::{Flow, Game, MainMenu, MenuOption, Scene, SceneKind, Transition};
pub use spawn::{mines_due, place_food, spawn_mine_if_due};
pub use state::{Arena, Food, GameScene, Mine, Player};
pub use tick::tick;
