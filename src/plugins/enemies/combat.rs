//! Collision and damage resolution for a single enemy.
//!
//! Everything here is plain data in, plain data out. The ECS layer adapts bullets
//! and the player into the contracts below and forwards side effects through an
//! [`EffectSink`], which keeps the per-tick order easy to test:
//!
//! ```text
//! steer -> projectile hits -> health-bar ratio -> player contact -> cooldown
//! ```

use bevy::prelude::*;

use crate::common::geometry::{overlaps, usable_dt};
use crate::plugins::effects::{EffectSink, ParticleBurst, SoundCue};
use crate::plugins::player::PlayerVitals;

use super::components::Enemy;

/// Burst emitted when a projectile hits an enemy that survives: (count, magnitude).
pub const HIT_BURST: (u32, u32) = (30, 15);
/// Burst emitted when an enemy dies.
pub const DEATH_BURST: (u32, u32) = (50, 30);
/// Burst emitted at the player when an enemy lands a contact hit.
pub const CONTACT_BURST: (u32, u32) = (50, 20);

/// What the resolver needs from a projectile.
pub trait Projectile {
    fn bounds(&self) -> Rect;
    /// Take the projectile out of play. Called at most once per projectile.
    fn destroy(&mut self);
}

/// The player as seen by an enemy during one tick.
pub struct PlayerTarget<'a> {
    pub position: Vec2,
    pub hit_volume: Rect,
    pub vitals: &'a mut PlayerVitals,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectileOutcome {
    pub hits: u32,
    pub killed: bool,
}

/// Test every projectile against the enemy's sprite rectangle, in iteration order.
///
/// Each overlapping projectile costs the enemy one health and is destroyed.
/// Resolution stops as soon as the enemy dies; remaining projectiles are left alone.
pub fn resolve_projectiles<P, I>(
    enemy: &mut Enemy,
    center: Vec2,
    projectiles: I,
    vitals: &mut PlayerVitals,
    fx: &mut impl EffectSink,
) -> ProjectileOutcome
where
    P: Projectile,
    I: IntoIterator<Item = P>,
{
    let mut outcome = ProjectileOutcome::default();
    if !enemy.is_alive() {
        return outcome;
    }
    let body = enemy.visual_rect(center);

    for mut projectile in projectiles {
        if !overlaps(body, projectile.bounds()) {
            continue;
        }

        projectile.destroy();
        outcome.hits += 1;

        if enemy.take_hit() {
            vitals.add_score(enemy.score_weight());
            fx.play_sound(SoundCue::Explosion);
            fx.spawn_particles(ParticleBurst::sparks(center, DEATH_BURST.0, DEATH_BURST.1));
            outcome.killed = true;
            break;
        }

        fx.play_sound(SoundCue::EnemyHit);
        fx.spawn_particles(ParticleBurst::sparks(center, HIT_BURST.0, HIT_BURST.1));
    }

    outcome
}

/// Deal contact damage if the enemy is engaging and the hit-volumes overlap.
///
/// Returns `true` when damage was dealt. A successful hit puts the enemy into
/// recovery, so calling this again in the same tick is a no-op.
pub fn resolve_player_contact(
    enemy: &mut Enemy,
    center: Vec2,
    player: &mut PlayerTarget<'_>,
    fx: &mut impl EffectSink,
) -> bool {
    if !enemy.can_strike() {
        return false;
    }
    if !overlaps(enemy.hit_rect(center), player.hit_volume) {
        return false;
    }

    player.vitals.take_damage(enemy.damage());
    enemy.begin_recovery();
    fx.play_sound(SoundCue::Hit);
    fx.spawn_particles(ParticleBurst::sparks(player.position, CONTACT_BURST.0, CONTACT_BURST.1));
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub projectile_hits: u32,
    pub killed: bool,
    pub struck_player: bool,
    pub became_engaging: bool,
    /// Health-bar fill reported this tick.
    pub health_ratio: f32,
}

/// Run one full enemy tick in the fixed order.
///
/// A negative or non-finite `dt` skips the tick. With `dt == 0` nothing moves and
/// the cooldown does not advance, but hits are still resolved.
/// A killed enemy stops after projectile resolution; the caller removes it.
pub fn tick_enemy<P, I>(
    enemy: &mut Enemy,
    position: &mut Vec2,
    dt: f32,
    projectiles: I,
    player: &mut PlayerTarget<'_>,
    fx: &mut impl EffectSink,
) -> TickReport
where
    P: Projectile,
    I: IntoIterator<Item = P>,
{
    let mut report = TickReport {
        health_ratio: enemy.health_ratio(),
        ..default()
    };
    let Some(dt) = usable_dt(dt) else {
        return report;
    };
    if !enemy.is_alive() {
        return report;
    }

    enemy.steer(position, player.position, dt);

    let shots = resolve_projectiles(enemy, *position, projectiles, &mut *player.vitals, fx);
    report.projectile_hits = shots.hits;
    report.health_ratio = enemy.health_ratio();
    if shots.killed {
        report.killed = true;
        return report;
    }

    report.struck_player = resolve_player_contact(enemy, *position, player, fx);
    report.became_engaging = enemy.advance_cooldown(dt);
    report
}
