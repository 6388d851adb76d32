//! Axis-aligned rectangles in whole-pixel coordinates
//!
//! Collision is a containment test: one rectangle has to sit completely
//! inside the other. Merely overlapping rectangles do not collide.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Half-open rectangle `[min, max)` in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle for an entity at `pos` with logical `size`.
    ///
    /// The position is truncated toward zero onto the pixel grid before the
    /// size is added, so an entity at (9.9, 3.2) starts at pixel (9, 3).
    pub fn from_entity(pos: Vec2, size: IVec2) -> Self {
        let min = pos.as_ivec2();
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// A rectangle with no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }
}

/// True iff `inner` lies entirely within `outer` (all four edges inside).
///
/// An empty `inner` is contained in every rectangle.
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    if inner.is_empty() {
        return true;
    }
    outer.min.x <= inner.min.x
        && inner.max.x <= outer.max.x
        && outer.min.y <= inner.min.y
        && inner.max.y <= outer.max.y
}
