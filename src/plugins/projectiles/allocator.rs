//! Spawn consumer: the only system that pops bullets off the pool.
//!
//! Every entity on the free list was spawned by `init_bullet_pool`, so a pooled
//! entity that no longer matches the bullet query is a bug and panics.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Bullet, BulletEntity, BulletState, PooledBullet};
use super::messages::SpawnBulletRequest;
use super::pool::BulletPool;

type PooledBulletParts<'a> = (
    &'a mut BulletState,
    &'a mut Bullet,
    &'a mut Transform,
    &'a mut LinearVelocity,
    &'a mut Visibility,
);

pub fn allocate_bullets_from_pool(
    tunables: Res<Tunables>,
    mut pool: ResMut<BulletPool>,
    mut reader: MessageReader<SpawnBulletRequest>,
    mut q: Query<PooledBulletParts, With<PooledBullet>>,
) {
    let mut dropped = 0usize;

    for req in reader.read() {
        let Some(BulletEntity(e)) = pool.pop_free() else {
            dropped += 1;
            continue;
        };

        let (mut state, mut bullet, mut tf, mut vel, mut vis) =
            q.get_mut(e).expect("pooled bullet lost its components");

        *state = BulletState::Active;
        bullet.reset_for_fire(tunables.bullet_lifetime_secs);
        tf.translation = req.pos.extend(tf.translation.z);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
    }

    if dropped > 0 {
        debug!("bullet pool exhausted: dropped {dropped} shot(s), capacity {}", pool.capacity());
    }
}
