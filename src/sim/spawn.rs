//! Procedural placement of food and mines

use rand::Rng;

use super::state::{Arena, Food, Mine};
use crate::consts::MINE_INTERVAL_SECS;

/// Put eaten food back somewhere random. No-op while it is still uneaten.
pub fn place_food<R: Rng + ?Sized>(food: &mut Food, arena: &Arena, rng: &mut R) -> bool {
    if !food.eaten {
        return false;
    }
    food.pos = arena.random_point(rng);
    food.eaten = false;
    log::debug!("Placed food at ({:.1}, {:.1})", food.pos.x, food.pos.y);
    true
}

/// Number of mine thresholds crossed after `elapsed_secs` whole seconds
#[inline]
pub fn mines_due(elapsed_secs: u64) -> u64 {
    elapsed_secs / MINE_INTERVAL_SECS
}

/// Add at most one mine if the run is behind schedule.
///
/// Skipped thresholds are not caught up within the same call; each call
/// adds a single mine at most.
pub fn spawn_mine_if_due<R: Rng + ?Sized>(
    mines: &mut Vec<Mine>,
    elapsed_secs: u64,
    arena: &Arena,
    rng: &mut R,
) -> bool {
    if mines_due(elapsed_secs) <= mines.len() as u64 {
        return false;
    }
    mines.push(Mine::new(arena.random_point(rng)));
    log::debug!("Spawned mine #{} at {}s", mines.len(), elapsed_secs);
    true
}
