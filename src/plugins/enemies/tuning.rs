//! Enemy and spawner tuning.
//!
//! Both variants share one behaviour; everything that tells them apart lives in a
//! [`VariantTuning`] record. Values are validated once, when the spawner is built,
//! so the per-tick code can trust them.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use thiserror::Error;

/// The two enemy shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyVariant {
    /// Fast and fragile.
    Triangle,
    /// Slow and tough.
    Square,
}

impl EnemyVariant {
    pub const ALL: [EnemyVariant; 2] = [EnemyVariant::Triangle, EnemyVariant::Square];

    pub fn name(self) -> &'static str {
        match self {
            EnemyVariant::Triangle => "Triangle",
            EnemyVariant::Square => "Square",
        }
    }
}

/// Per-variant constants. Speeds and rates are in game time-units.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantTuning {
    /// Max speed is drawn uniformly from this range at creation.
    pub speed_range: RangeInclusive<f32>,
    /// Sprite footprint; projectiles are tested against this.
    pub visual_size: Vec2,
    /// Contact rectangle; smaller than the sprite.
    pub hit_volume: Vec2,
    pub health: u32,
    pub damage: i32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub color: Color,
}

impl VariantTuning {
    pub fn triangle() -> Self {
        Self {
            speed_range: 3.0..=5.0,
            visual_size: Vec2::splat(44.0),
            hit_volume: Vec2::splat(30.0),
            health: 2,
            damage: 1,
            acceleration: 0.7,
            deceleration: 0.3,
            color: Color::srgb(0.55, 0.67, 0.06),
        }
    }

    pub fn square() -> Self {
        Self {
            speed_range: 1.0..=2.0,
            visual_size: Vec2::splat(52.0),
            hit_volume: Vec2::splat(40.0),
            health: 4,
            damage: 2,
            acceleration: 0.1,
            deceleration: 0.05,
            color: Color::srgb(0.19, 0.38, 0.19),
        }
    }

    pub fn validate(&self, variant: EnemyVariant) -> Result<(), TuningError> {
        let (min, max) = (*self.speed_range.start(), *self.speed_range.end());
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(TuningError::SpeedRange { variant, min, max });
        }
        for (what, size) in [("visual size", self.visual_size), ("hit-volume", self.hit_volume)] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(TuningError::NonPositiveSize { variant, what, size });
            }
        }
        if self.health == 0 {
            return Err(TuningError::ZeroHealth { variant });
        }
        if self.damage < 0 {
            return Err(TuningError::NegativeDamage { variant, damage: self.damage });
        }
        for (what, rate) in [("acceleration", self.acceleration), ("deceleration", self.deceleration)] {
            if !(rate.is_finite() && rate >= 0.0) {
                return Err(TuningError::Rate { variant, what, rate });
            }
        }
        Ok(())
    }
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTunables {
    pub triangle: VariantTuning,
    pub square: VariantTuning,
    /// Time-units an enemy must wait between two contact hits on the player.
    pub contact_cooldown: f32,
}

impl Default for EnemyTunables {
    fn default() -> Self {
        Self {
            triangle: VariantTuning::triangle(),
            square: VariantTuning::square(),
            contact_cooldown: 120.0,
        }
    }
}

impl EnemyTunables {
    pub fn variant(&self, variant: EnemyVariant) -> &VariantTuning {
        match variant {
            EnemyVariant::Triangle => &self.triangle,
            EnemyVariant::Square => &self.square,
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for v in EnemyVariant::ALL {
            self.variant(v).validate(v)?;
        }
        if !(self.contact_cooldown.is_finite() && self.contact_cooldown >= 0.0) {
            return Err(TuningError::Cooldown(self.contact_cooldown));
        }
        Ok(())
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SpawnerTunables {
    /// Time-units between spawns.
    pub interval: f32,
    /// No spawn happens while this many enemies are alive.
    pub population_cap: usize,
    pub triangle_weight: u32,
    pub square_weight: u32,
    /// Per-axis distance from the anchor where the spawn bands start (just off-screen).
    /// Must be positive, or the two bands meet at the anchor.
    pub ring_inner: Vec2,
    /// Per-axis distance from the anchor where the spawn bands end.
    pub ring_outer: Vec2,
    /// Fixed seed for reproducible waves; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpawnerTunables {
    fn default() -> Self {
        Self {
            interval: 30.0,
            population_cap: 10,
            triangle_weight: 7,
            square_weight: 3,
            ring_inner: Vec2::new(840.0, 560.0),
            ring_outer: Vec2::new(1040.0, 760.0),
            seed: None,
        }
    }
}

impl SpawnerTunables {
    pub fn weight(&self, variant: EnemyVariant) -> u32 {
        match variant {
            EnemyVariant::Triangle => self.triangle_weight,
            EnemyVariant::Square => self.square_weight,
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.interval.is_finite() && self.interval >= 0.0) {
            return Err(TuningError::Interval(self.interval));
        }
        let ring_ok = self.ring_inner.is_finite()
            && self.ring_outer.is_finite()
            && self.ring_inner.cmpgt(Vec2::ZERO).all()
            && self.ring_inner.cmplt(self.ring_outer).all();
        if !ring_ok {
            return Err(TuningError::SpawnRing { inner: self.ring_inner, outer: self.ring_outer });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{variant:?}: invalid speed range {min}..={max}")]
    SpeedRange { variant: EnemyVariant, min: f32, max: f32 },

    #[error("{variant:?}: {what} must be positive, got {size}")]
    NonPositiveSize { variant: EnemyVariant, what: &'static str, size: Vec2 },

    #[error("{variant:?}: health must be at least 1")]
    ZeroHealth { variant: EnemyVariant },

    #[error("{variant:?}: damage must not be negative, got {damage}")]
    NegativeDamage { variant: EnemyVariant, damage: i32 },

    #[error("{variant:?}: {what} must be finite and non-negative, got {rate}")]
    Rate { variant: EnemyVariant, what: &'static str, rate: f32 },

    #[error("contact cooldown must be finite and non-negative, got {0}")]
    Cooldown(f32),

    #[error("spawn interval must be finite and non-negative, got {0}")]
    Interval(f32),

    #[error("spawn ring needs 0 < inner < outer on both axes, got inner {inner} outer {outer}")]
    SpawnRing { inner: Vec2, outer: Vec2 },

    #[error("at least one variant weight must be non-zero")]
    NoVariantWeight,
}
