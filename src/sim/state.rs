//! Run state and entity types
//!
//! Everything a single run needs lives in [`GameScene`]. Entity sizes are
//! plain data here, independent of how anything gets drawn.

use std::time::Duration;

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Fixed play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.height as f32
    }

    /// Whether `pos` lies in `[0, w) x [0, h)`
    pub fn contains_point(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.w() && pos.y >= 0.0 && pos.y < self.h()
    }

    /// Uniformly random point in `[0, w) x [0, h)`
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(rng.random_range(0.0..self.w()), rng.random_range(0.0..self.h()))
    }
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: IVec2,
    /// Pixels per tick, per axis
    pub speed: f32,
}

impl Player {
    /// Player centred in the arena (whole-pixel centre, as the screen layout does)
    pub fn centered(arena: &Arena) -> Self {
        let size = PLAYER_SIZE;
        let x = (arena.width / 2) as f32 - (size.x / 2) as f32;
        let y = (arena.height / 2) as f32 - (size.y / 2) as f32;
        Self {
            pos: Vec2::new(x, y),
            size,
            speed: PLAYER_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_entity(self.pos, self.size)
    }
}

/// The single food item of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    pub size: IVec2,
    /// While set, `pos` is stale and the food must be placed again
    pub eaten: bool,
}

impl Default for Food {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: FOOD_SIZE,
            eaten: true,
        }
    }
}

impl Food {
    pub fn rect(&self) -> Rect {
        Rect::from_entity(self.pos, self.size)
    }
}

/// A stationary hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mine {
    pub pos: Vec2,
    pub size: IVec2,
}

impl Mine {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: MINE_SIZE,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_entity(self.pos, self.size)
    }
}

/// Complete state of one run (created fresh on every entry into Playing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameScene {
    pub arena: Arena,
    pub player: Player,
    pub food: Food,
    /// Mines in spawn order; only ever grows
    pub mines: Vec<Mine>,
    pub score: u32,
    /// Clock reading when the run started
    pub started_at: Duration,
    pub duration: Duration,
}

impl GameScene {
    /// Start a run at clock reading `now`
    pub fn new(arena: Arena, now: Duration) -> Self {
        Self {
            arena,
            player: Player::centered(&arena),
            food: Food::default(),
            mines: Vec::new(),
            score: 0,
            started_at: now,
            duration: RUN_DURATION,
        }
    }

    /// Clock reading at which the run expires
    pub fn ends_at(&self) -> Duration {
        self.started_at + self.duration
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.ends_at()
    }

    /// Whole seconds since the run started (floored)
    pub fn elapsed_secs(&self, now: Duration) -> u64 {
        now.saturating_sub(self.started_at).as_secs()
    }

    /// Countdown for display, truncated to whole seconds
    pub fn time_remaining(&self, now: Duration) -> Duration {
        Duration::from_secs(self.ends_at().saturating_sub(now).as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_scene_is_fresh() {
        let scene = GameScene::new(Arena::default(), Duration::from_secs(5));
        assert_eq!(scene.score, 0);
        assert!(scene.mines.is_empty());
        assert!(scene.food.eaten);
        assert_eq!(scene.player.pos, Vec2::new(310.0, 230.0));
        assert_eq!(scene.ends_at(), Duration::from_secs(65));
    }

    #[test]
    fn test_elapsed_and_remaining() {
        let scene = GameScene::new(Arena::default(), Duration::from_secs(10));
        let now = Duration::from_millis(10_000 + 31_900);
        assert_eq!(scene.elapsed_secs(now), 31);
        assert_eq!(scene.time_remaining(now), Duration::from_secs(28));
        assert!(!scene.is_expired(now));
        assert!(scene.is_expired(Duration::from_secs(70)));
        assert_eq!(scene.time_remaining(Duration::from_secs(99)), Duration::ZERO);
        // Clock readings before the start never underflow
        assert_eq!(scene.elapsed_secs(Duration::ZERO), 0);
    }

    #[test]
    fn test_random_point_in_arena() {
        let arena = Arena::new(64, 48);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(arena.contains_point(arena.random_point(&mut rng)));
        }
    }
}
