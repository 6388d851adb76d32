//! Player movement and arena clamping

use glam::Vec2;

use super::input::Keys;
use super::state::{Arena, Player};

/// Position delta for the held direction keys.
///
/// Diagonals are checked before single directions and win. There is no
/// normalisation: a diagonal moves `speed` on both axes at once.
pub fn movement_delta(held: Keys, speed: f32) -> Vec2 {
    let up = held.contains(Keys::UP);
    let down = held.contains(Keys::DOWN);
    let left = held.contains(Keys::LEFT);
    let right = held.contains(Keys::RIGHT);

    if up && left {
        Vec2::new(-speed, -speed)
    } else if up && right {
        Vec2::new(speed, -speed)
    } else if down && left {
        Vec2::new(-speed, speed)
    } else if down && right {
        Vec2::new(speed, speed)
    } else if up {
        Vec2::new(0.0, -speed)
    } else if down {
        Vec2::new(0.0, speed)
    } else if left {
        Vec2::new(-speed, 0.0)
    } else if right {
        Vec2::new(speed, 0.0)
    } else {
        Vec2::ZERO
    }
}

/// Correct one axis. Negative values are mirrored back over zero; a far
/// edge past the arena snaps the entity flush against it.
fn clamp_axis(value: f32, extent: f32, limit: f32) -> Option<f32> {
    let mut out = value;
    if out < 0.0 {
        out = -out;
    }
    if out + extent > limit {
        out = limit - extent;
    }
    (out != value).then_some(out)
}

impl Player {
    /// Apply one tick of movement from the held keys
    pub fn step(&mut self, held: Keys) {
        self.pos += movement_delta(held, self.speed);
    }

    /// Force the player back inside the arena. Returns true if corrected.
    pub fn clamp_to(&mut self, arena: &Arena) -> bool {
        let mut corrected = false;
        if let Some(x) = clamp_axis(self.pos.x, self.size.x as f32, arena.w()) {
            log::debug!("Out of bounds x: {} -> {}", self.pos.x, x);
            self.pos.x = x;
            corrected = true;
        }
        if let Some(y) = clamp_axis(self.pos.y, self.size.y as f32, arena.h()) {
            log::debug!("Out of bounds y: {} -> {}", self.pos.y, y);
            self.pos.y = y;
            corrected = true;
        }
        corrected
    }
}
