//! Tunable gameplay constants.

use bevy::prelude::*;

/// Global tunables shared by the host collaborators (player, bullets, physics).
///
/// Enemy-specific tuning lives in `plugins::enemies::tuning`.
#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub bullet_size: f32,
    pub bullet_lifetime_secs: f32,
    /// Minimum seconds between two shots while the fire button is held.
    pub fire_interval_secs: f32,
    pub player_max_health: i32,
    pub player_hit_volume: Vec2,
    /// Game time-units per real second. Enemy speeds, cooldowns and the
    /// spawn interval are expressed in these units.
    pub ticks_per_second: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            bullet_speed: 900.0,
            bullet_size: 8.0,
            bullet_lifetime_secs: 2.0,
            fire_interval_secs: 0.12,
            player_max_health: 10,
            player_hit_volume: Vec2::splat(24.0),
            ticks_per_second: 60.0,
        }
    }
}

impl Tunables {
    /// Convert a fixed-step delta (seconds) into game time-units.
    #[inline]
    pub fn time_units(&self, delta_secs: f32) -> f32 {
        delta_secs * self.ticks_per_second
    }
}
