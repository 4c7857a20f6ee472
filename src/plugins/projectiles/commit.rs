//! Bullet retirement: lifetime expiry and return-to-pool commit.
//!
//! The commit system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive bullets must be:
//! - hidden
//! - velocity = 0
//! - present in the pool free list exactly once

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Bullet, BulletEntity, BulletState, PooledBullet};
use super::pool::BulletPool;

/// Active bullets that outlive their lifetime are flagged for return.
pub fn expire_bullets(
    time: Res<Time<Fixed>>,
    mut q: Query<(&mut Bullet, &mut BulletState), With<PooledBullet>>,
) {
    let dt = time.delta_secs();
    for (mut bullet, mut state) in &mut q {
        if *state != BulletState::Active {
            continue;
        }
        bullet.life_remaining -= dt;
        if bullet.life_remaining <= 0.0 {
            *state = BulletState::PendingReturn;
        }
    }
}

pub fn return_to_pool_commit(
    mut pool: ResMut<BulletPool>,
    mut q: Query<(
        Entity,
        &mut BulletState,
        &mut Visibility,
        &mut LinearVelocity,
    ), With<PooledBullet>>,
) {
    for (e, mut state, mut vis, mut vel) in &mut q {
        if *state != BulletState::PendingReturn { continue; }

        *state = BulletState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;

        pool.push_free(BulletEntity(e));
    }
}
