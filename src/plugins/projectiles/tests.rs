//! Projectile pool tests.
//!
//! Spawn requests are injected as messages directly and the consumer systems are
//! run once, so nothing here depends on input or the physics step.
use bevy::{ecs::message::Messages, prelude::*};
use avian2d::prelude::*;

use crate::common::test_utils::{fixed_time_with_delta, run_system_once};
use crate::common::tunables::Tunables;
use super::{allocator, commit, components, messages, pool, request};

fn world_with_pool(capacity: usize) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(pool::BulletPool::new(capacity));
    world.init_resource::<Messages<messages::SpawnBulletRequest>>();
    run_system_once(&mut world, pool::init_bullet_pool);
    world
}

fn fire(world: &mut World, pos: Vec2, vel: Vec2) {
    world.write_message(messages::SpawnBulletRequest { pos, vel, owner: None });
    run_system_once(world, allocator::allocate_bullets_from_pool);
}

fn active_bullets(world: &mut World) -> Vec<Entity> {
    world
        .query::<(Entity, &components::BulletState)>()
        .iter(world)
        .filter(|(_, s)| **s == components::BulletState::Active)
        .map(|(e, _)| e)
        .collect()
}

// --------------------------------------------------------------------------------------
// Pool
// --------------------------------------------------------------------------------------

#[test]
fn init_bullet_pool_spawns_capacity_bullets_inactive() {
    let mut world = world_with_pool(8);

    assert_eq!(world.resource::<pool::BulletPool>().free_len(), 8);

    let mut q = world.query::<(
        &components::PooledBullet,
        &components::BulletState,
        &Visibility,
        &components::Bullet,
    )>();

    assert_eq!(q.iter(&world).count(), 8);
    for (_pb, state, vis, bullet) in q.iter(&world) {
        assert_eq!(*state, components::BulletState::Inactive);
        assert_eq!(*vis, Visibility::Hidden);
        assert_eq!(bullet.size, Tunables::default().bullet_size);
    }
}

#[test]
fn allocator_activates_bullet_from_pool() {
    let mut world = world_with_pool(1);

    fire(&mut world, Vec2::new(10.0, 20.0), Vec2::new(100.0, 0.0));

    let active = active_bullets(&mut world);
    assert_eq!(active.len(), 1);
    let e = active[0];

    assert_eq!(world.get::<Transform>(e).unwrap().translation.truncate(), Vec2::new(10.0, 20.0));
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(100.0, 0.0));
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Visible);
    assert_eq!(
        world.get::<components::Bullet>(e).unwrap().life_remaining,
        Tunables::default().bullet_lifetime_secs
    );
    assert_eq!(world.resource::<pool::BulletPool>().free_len(), 0);
}

#[test]
fn allocator_drops_requests_when_pool_is_empty() {
    let mut world = world_with_pool(1);

    fire(&mut world, Vec2::ZERO, Vec2::X);
    fire(&mut world, Vec2::ZERO, Vec2::X);

    assert_eq!(active_bullets(&mut world).len(), 1);
}

// --------------------------------------------------------------------------------------
// Retirement
// --------------------------------------------------------------------------------------

#[test]
fn expire_bullets_flags_bullets_past_their_lifetime() {
    let mut world = world_with_pool(1);
    fire(&mut world, Vec2::ZERO, Vec2::X);
    let e = active_bullets(&mut world)[0];

    world.insert_resource(fixed_time_with_delta(0.5));
    run_system_once(&mut world, commit::expire_bullets);
    assert_eq!(*world.get::<components::BulletState>(e).unwrap(), components::BulletState::Active);

    world.insert_resource(fixed_time_with_delta(Tunables::default().bullet_lifetime_secs));
    run_system_once(&mut world, commit::expire_bullets);
    assert_eq!(
        *world.get::<components::BulletState>(e).unwrap(),
        components::BulletState::PendingReturn
    );
}

#[test]
fn return_to_pool_commit_deactivates_and_recycles() {
    let mut world = world_with_pool(1);
    fire(&mut world, Vec2::ZERO, Vec2::new(10.0, 0.0));
    let e = active_bullets(&mut world)[0];

    *world.get_mut::<components::BulletState>(e).unwrap() = components::BulletState::PendingReturn;

    run_system_once(&mut world, commit::return_to_pool_commit);

    assert_eq!(*world.get::<components::BulletState>(e).unwrap(), components::BulletState::Inactive);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);
    assert_eq!(world.resource::<pool::BulletPool>().free_len(), 1);
}

#[test]
fn bullet_bounds_are_centred_square() {
    let b = components::Bullet::new(8.0);
    let r = b.bounds(Vec2::new(5.0, 5.0));
    assert_eq!(r.min, Vec2::new(1.0, 1.0));
    assert_eq!(r.max, Vec2::new(9.0, 9.0));
}

// --------------------------------------------------------------------------------------
// Firing
// --------------------------------------------------------------------------------------

#[test]
fn fire_control_limits_rate_while_held() {
    let mut fire = request::FireControl::default();
    let interval = 0.12;

    assert!(fire.pull(0.016, true, interval));
    assert!(!fire.pull(0.05, true, interval));
    assert!(!fire.pull(0.05, true, interval));
    assert!(fire.pull(0.05, true, interval));
}

#[test]
fn fire_control_needs_the_button() {
    let mut fire = request::FireControl::default();
    assert!(!fire.pull(1.0, false, 0.12));
    assert!(fire.pull(0.0, true, 0.12));
}

#[test]
fn shots_leave_the_muzzle_toward_the_cursor() {
    let req = request::shot_toward(Vec2::new(10.0, 10.0), Vec2::new(110.0, 10.0), 900.0, None);
    assert_eq!(req.pos, Vec2::new(28.0, 10.0));
    assert_eq!(req.vel, Vec2::new(900.0, 0.0));

    // Cursor on the player: fire straight up.
    assert_eq!(request::aim(Vec2::ONE, Vec2::ONE), Vec2::Y);
}
