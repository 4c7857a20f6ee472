//! Enemies plugin: shape enemies that chase the player, trade damage with bullets
//! and the player, and are kept topped up by a spawner.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED
//! ---------------------------
//! The rules live in plain Rust, the ECS only wires them up:
//!
//! - `kinematics`: velocity integration (accelerate, decay, clamp, move).
//! - `components`: the `Enemy` record and its Engaging/Recovering state machine.
//! - `combat`: projectile and contact resolution behind the `Projectile` and
//!   `EffectSink` contracts, plus the ordered single-enemy tick.
//! - `spawner`: interval + population cap + weighted variant choice over an
//!   injected, seedable RNG.
//! - `systems`: adapters from queries to the contracts above.
//!
//! ---------------------------
//! SCHEDULES
//! ---------------------------
//! - FixedUpdate: `spawn_enemies` in `FixedSet::Spawn`, then `tick_enemies` in
//!   `FixedSet::Combat`, ahead of bullet expiry in `FixedSet::Retire`.
//! - PostUpdate: `sync_health_bars` then `despawn_marked_enemies`.
//!
//! Enemies that die are only marked `PendingDespawn` inside the fixed step; the
//! despawn happens in PostUpdate so no query ever iterates a half-removed entity.
//!
//! ---------------------------
//! TIME MODEL
//! ---------------------------
//! Every enemy constant is in game time-units: `Tunables::time_units` turns the
//! fixed delta into units (60 per second by default).

use bevy::prelude::*;

use crate::common::schedule::FixedSet;
use crate::common::state::GameState;

pub mod combat;
pub mod components;
pub mod kinematics;
pub mod spawner;
pub mod systems;
pub mod tuning;

pub use components::{Enemy, EnemyStance, PendingDespawn};
pub use tuning::{EnemyTunables, EnemyVariant, SpawnerTunables, TuningError};

/// Register enemy resources and systems.
///
/// Tuning resources already present in the app are kept, so tests and callers can
/// pre-insert their own. Invalid tuning disables the spawner instead of panicking.
pub fn plugin(app: &mut App) {
    app.init_resource::<EnemyTunables>();
    app.init_resource::<SpawnerTunables>();

    let spawner_tunables = app.world().resource::<SpawnerTunables>().clone();
    app.insert_resource(spawner::SpawnRng::from_tunables(&spawner_tunables));

    let built = app
        .world()
        .resource::<EnemyTunables>()
        .validate()
        .and_then(|()| spawner::EnemySpawner::new(spawner_tunables));
    match built {
        Ok(s) => {
            app.insert_resource(s);
        }
        Err(e) => error!("enemy spawner disabled: {e}"),
    }

    app.add_systems(
        FixedUpdate,
        (
            systems::spawn_enemies.in_set(FixedSet::Spawn),
            systems::tick_enemies.in_set(FixedSet::Combat),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        (systems::sync_health_bars, systems::despawn_marked_enemies)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}
