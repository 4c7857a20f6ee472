//! Projectiles plugin: **message-based producer → consumer** spawning over a bullet pool.
//!
//! Bullets are the projectile collaborator of the enemy subsystem. Enemies read
//! `Bullet::bounds` and "destroy" a bullet by flipping it to `PendingReturn`;
//! nothing here knows about enemies.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!     request_player_bullets ──SpawnBulletRequest──> allocate_bullets_from_pool
//!     (hold-to-fire, rate limited)
//!                                                     (pool pop, state = Active)
//!
//!   FixedUpdate
//!     enemies::tick_enemies   Active -> PendingReturn on hit          (FixedSet::Combat)
//!     expire_bullets          Active -> PendingReturn when lifetime runs out (FixedSet::Retire)
//!
//!   FixedPostUpdate
//!     return_to_pool_commit   PendingReturn -> Inactive, pool push
//! ```
//!
//! The allocator is the **single writer** that pops from the pool and the commit
//! is the single writer that pushes back, so pool mutation stays localized.

pub mod components;
pub mod pool;

pub mod messages;
pub mod request;
pub mod allocator;
pub mod commit;

use bevy::prelude::*;
use bevy::ecs::message::Messages;

use crate::common::schedule::FixedSet;
use crate::common::state::GameState;

pub struct ProjectilesPlugin;

/// Maintain spawn request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnBulletRequest>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        // Pool + pre-spawn
        app.insert_resource(pool::BulletPool::new(256))
            .add_systems(Startup, pool::init_bullet_pool);

        // Message storage for spawn requests.
        app.init_resource::<Messages<messages::SpawnBulletRequest>>();
        app.init_resource::<request::FireControl>();
        app.add_systems(PostUpdate, update_spawn_messages);

        app.add_systems(
            Update,
            (
                request::request_player_bullets,
                allocator::allocate_bullets_from_pool.after(request::request_player_bullets),
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            commit::expire_bullets
                .in_set(FixedSet::Retire)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            commit::return_to_pool_commit.run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
