//! Axis-aligned hit-volumes.
//!
//! Rectangles are never stored; they are rebuilt from the owner's center every
//! time they are needed, so a hit-volume can't drift away from its entity.

use bevy::prelude::*;

/// Fixed-size rectangle centred on its owner's position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HitVolume {
    pub size: Vec2,
}

impl HitVolume {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    #[inline]
    pub fn at(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.size)
    }
}

/// Strict overlap test: rectangles that only share an edge do not collide.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// `dt` values the simulation can integrate: finite and non-negative.
#[inline]
pub fn usable_dt(dt: f32) -> Option<f32> {
    (dt.is_finite() && dt >= 0.0).then_some(dt)
}
