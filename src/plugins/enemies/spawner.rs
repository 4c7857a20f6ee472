//! Time-driven population controller.
//!
//! The spawner accumulates game time and, once the interval has passed and the
//! population is under the cap, orders one new enemy just outside the visible
//! area. While the population is capped the accumulator keeps running, so an
//! overdue spawn fires on the first tick a slot frees up.

use bevy::prelude::*;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::geometry::usable_dt;

use super::tuning::{EnemyVariant, SpawnerTunables, TuningError};

/// Injected randomness for spawn positions, variants and enemy speeds.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_tunables(tunables: &SpawnerTunables) -> Self {
        match tunables.seed {
            Some(seed) => Self::seeded(seed),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// A spawn decision: what to create and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOrder {
    pub variant: EnemyVariant,
    pub position: Vec2,
}

#[derive(Resource, Debug, Clone)]
pub struct EnemySpawner {
    tunables: SpawnerTunables,
    elapsed: f32,
    weights: WeightedIndex<u32>,
}

impl EnemySpawner {
    pub fn new(tunables: SpawnerTunables) -> Result<Self, TuningError> {
        tunables.validate()?;
        let weights = WeightedIndex::new(EnemyVariant::ALL.map(|v| tunables.weight(v)))
            .map_err(|_| TuningError::NoVariantWeight)?;
        Ok(Self { tunables, elapsed: 0.0, weights })
    }

    #[inline]
    pub fn tunables(&self) -> &SpawnerTunables {
        &self.tunables
    }

    /// Time accumulated since the last spawn.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `dt` and decide whether to spawn.
    ///
    /// `live` is the current enemy count; `anchor` is the centre of the visible
    /// area the spawn ring surrounds.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        live: usize,
        anchor: Vec2,
        rng: &mut R,
    ) -> Option<SpawnOrder> {
        let dt = usable_dt(dt)?;
        self.elapsed += dt;

        if self.elapsed < self.tunables.interval || live >= self.tunables.population_cap {
            return None;
        }

        self.elapsed = 0.0;
        let variant = EnemyVariant::ALL[self.weights.sample(rng)];
        let offset = Vec2::new(
            sample_band(rng, self.tunables.ring_inner.x, self.tunables.ring_outer.x),
            sample_band(rng, self.tunables.ring_inner.y, self.tunables.ring_outer.y),
        );

        Some(SpawnOrder { variant, position: anchor + offset })
    }
}

/// Uniform over `[-outer, -inner] ∪ [inner, outer)`; both bands have equal width.
fn sample_band<R: Rng + ?Sized>(rng: &mut R, inner: f32, outer: f32) -> f32 {
    let magnitude = rng.gen_range(inner..outer);
    if rng.gen_bool(0.5) { -magnitude } else { magnitude }
}
