//! Enemy components.
//!
//! One `Enemy` type covers both shapes; the variant only selects a
//! [`VariantTuning`] record at creation time.

use bevy::prelude::*;
use rand::Rng;

use crate::common::geometry::{usable_dt, HitVolume};

use super::kinematics::Kinematics;
use super::tuning::{EnemyVariant, VariantTuning};

/// Engaging enemies chase the player and can deal contact damage.
/// Recovering enemies coast to a stop and cannot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnemyStance {
    #[default]
    Engaging,
    Recovering,
}

/// Time since the enemy last hurt the player.
///
/// The accumulator saturates at the threshold; only "reached or not" matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactCooldown {
    elapsed: f32,
    threshold: f32,
}

impl ContactCooldown {
    /// A cooldown that is already elapsed.
    pub fn ready(threshold: f32) -> Self {
        let threshold = threshold.max(0.0);
        Self { elapsed: threshold, threshold }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.elapsed >= self.threshold
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn advance(&mut self, dt: f32) {
        if let Some(dt) = usable_dt(dt) {
            self.elapsed = (self.elapsed + dt).min(self.threshold);
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    variant: EnemyVariant,
    kinematics: Kinematics,
    health: u32,
    max_health: u32,
    damage: i32,
    score_weight: u32,
    stance: EnemyStance,
    cooldown: ContactCooldown,
    hit_volume: HitVolume,
    visual_size: Vec2,
}

impl Enemy {
    /// Create an enemy with its max speed drawn from the variant's speed range.
    pub fn spawn<R: Rng + ?Sized>(
        variant: EnemyVariant,
        tuning: &VariantTuning,
        contact_cooldown: f32,
        rng: &mut R,
    ) -> Self {
        let max_speed = rng.gen_range(tuning.speed_range.clone());
        Self::with_max_speed(variant, tuning, contact_cooldown, max_speed)
    }

    pub fn with_max_speed(
        variant: EnemyVariant,
        tuning: &VariantTuning,
        contact_cooldown: f32,
        max_speed: f32,
    ) -> Self {
        let kinematics = Kinematics::new(max_speed, tuning.acceleration, tuning.deceleration);
        let max_health = tuning.health;
        let damage = tuning.damage;
        Self {
            variant,
            score_weight: score_weight(kinematics.max_speed(), max_health, damage),
            kinematics,
            health: max_health,
            max_health,
            damage,
            stance: EnemyStance::Engaging,
            cooldown: ContactCooldown::ready(contact_cooldown),
            hit_volume: HitVolume::new(tuning.hit_volume),
            visual_size: tuning.visual_size,
        }
    }

    #[inline]
    pub fn variant(&self) -> EnemyVariant {
        self.variant
    }

    #[inline]
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.kinematics.velocity()
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.kinematics.max_speed()
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[inline]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Score granted to the player on death. Fixed at creation.
    #[inline]
    pub fn score_weight(&self) -> u32 {
        self.score_weight
    }

    #[inline]
    pub fn stance(&self) -> EnemyStance {
        self.stance
    }

    #[inline]
    pub fn is_recovering(&self) -> bool {
        self.stance == EnemyStance::Recovering
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[inline]
    pub fn cooldown(&self) -> &ContactCooldown {
        &self.cooldown
    }

    /// Fill ratio for the health bar, in `[0, 1]`.
    #[inline]
    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Contact rectangle centred on `center`.
    #[inline]
    pub fn hit_rect(&self, center: Vec2) -> Rect {
        self.hit_volume.at(center)
    }

    /// Sprite rectangle centred on `center`; projectiles test against this one.
    #[inline]
    pub fn visual_rect(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.visual_size)
    }

    #[inline]
    pub fn visual_size(&self) -> Vec2 {
        self.visual_size
    }

    /// Move toward `target` for one tick.
    pub fn steer(&mut self, position: &mut Vec2, target: Vec2, dt: f32) {
        let recovering = self.is_recovering();
        self.kinematics.step(position, target, dt, recovering);
    }

    /// Lose one point of health. Returns `true` when this hit killed the enemy.
    pub fn take_hit(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }

    /// Contact damage is only possible once the cooldown has elapsed.
    #[inline]
    pub fn can_strike(&self) -> bool {
        self.is_alive() && self.cooldown.is_ready()
    }

    /// Engaging -> Recovering after hurting the player.
    pub fn begin_recovery(&mut self) {
        self.cooldown.reset();
        self.stance = EnemyStance::Recovering;
    }

    /// Advance the cooldown and re-derive the stance.
    /// Returns `true` on the Recovering -> Engaging transition.
    pub fn advance_cooldown(&mut self, dt: f32) -> bool {
        self.cooldown.advance(dt);
        if self.stance == EnemyStance::Recovering && self.cooldown.is_ready() {
            self.stance = EnemyStance::Engaging;
            return true;
        }
        false
    }
}

/// `floor((max_speed + health + damage) / 2)`.
pub fn score_weight(max_speed: f32, health: u32, damage: i32) -> u32 {
    let total = max_speed + health as f32 + damage as f32;
    (total / 2.0).floor().max(0.0) as u32
}

/// Last reported health-bar state plus the sprites that draw it.
#[derive(Component, Debug, Clone, Copy)]
pub struct HealthBar {
    pub ratio: f32,
    pub back: Entity,
    pub fill: Entity,
}

/// Marker for health-bar sprites.
#[derive(Component, Debug, Clone, Copy)]
pub struct HealthBarPart;

/// Marker: enemy should be removed from the world.
///
/// We don't despawn inside the fixed step; we mark and despawn later in PostUpdate.
/// This keeps structural changes centralized and avoids iteration hazards.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;
