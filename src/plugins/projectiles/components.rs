use bevy::prelude::*;

#[derive(Component)]
pub struct PooledBullet;

/// Typed handle for an entity that lives in the bullet pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone)]
pub struct Bullet {
    /// Side length of the square bounding box, in pixels.
    pub size: f32,
    /// Seconds left before the bullet returns to the pool on its own.
    pub life_remaining: f32,
}

impl Bullet {
    pub fn new(size: f32) -> Self {
        Self { size, life_remaining: 0.0 }
    }

    #[inline]
    pub fn reset_for_fire(&mut self, lifetime_secs: f32) {
        self.life_remaining = lifetime_secs.max(0.0);
    }

    /// Bounding rectangle used for enemy hit tests.
    #[inline]
    pub fn bounds(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, Vec2::splat(self.size))
    }
}
