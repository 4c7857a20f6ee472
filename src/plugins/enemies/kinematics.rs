//! Enemy kinematic model.
//!
//! Velocity is steered toward a target with a per-variant acceleration, bled off
//! with a per-variant deceleration, and clamped to the enemy's max speed after
//! every step. All quantities are in game time-units (see `Tunables::time_units`).

use bevy::prelude::*;

use crate::common::geometry::usable_dt;

/// Velocity state plus the constants that shape it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    velocity: Vec2,
    max_speed: f32,
    acceleration: f32,
    deceleration: f32,
}

impl Kinematics {
    pub fn new(max_speed: f32, acceleration: f32, deceleration: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            max_speed: max_speed.max(0.0),
            acceleration,
            deceleration,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    #[inline]
    pub fn deceleration(&self) -> f32 {
        self.deceleration
    }

    /// Overwrite the velocity. The speed limit still applies.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity.clamp_length_max(self.max_speed);
    }

    /// Advance one tick: update velocity, then move `position` by it.
    ///
    /// - recovering: velocity bleeds off at half the deceleration rate.
    /// - engaging with a target elsewhere: accelerate along the unit direction.
    /// - sitting on the target: velocity bleeds off at the full deceleration rate.
    ///
    /// A zero, negative or non-finite `dt` leaves everything untouched.
    pub fn step(&mut self, position: &mut Vec2, target: Vec2, dt: f32, recovering: bool) {
        let Some(dt) = usable_dt(dt) else { return; };
        if dt == 0.0 {
            return;
        }

        let direction = (target - *position).normalize_or_zero();

        if recovering {
            self.decay(self.deceleration * 0.5 * dt);
        } else if direction != Vec2::ZERO {
            self.velocity += direction * self.acceleration * dt;
        } else {
            self.decay(self.deceleration * dt);
        }

        self.velocity = self.velocity.clamp_length_max(self.max_speed);

        *position += self.velocity * dt;
    }

    /// Remove `fraction` of the current velocity. The fraction is clamped to
    /// `[0, 1]` so a long tick stops the entity instead of reversing it.
    #[inline]
    fn decay(&mut self, fraction: f32) {
        self.velocity -= self.velocity * fraction.clamp(0.0, 1.0);
    }
}
