use bevy::prelude::*;
use avian2d::prelude::*;

use crate::common::geometry::HitVolume;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn spawn_creates_player_with_vitals() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_max_health: 7, ..Tunables::default() });
    run_system_once(&mut world, super::spawn);

    let (vitals, hv) = world
        .query_filtered::<(&super::PlayerVitals, &HitVolume), With<super::Player>>()
        .single(&world)
        .unwrap();
    assert_eq!(*vitals, super::PlayerVitals { health: 7, score: 0 });
    assert_eq!(hv.size, Tunables::default().player_hit_volume);
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..Tunables::default() });
    world.insert_resource(super::PlayerInput { move_axis: Vec2::new(1.0, 0.0) });
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn vitals_score_saturates() {
    let mut v = super::PlayerVitals { health: 3, score: u32::MAX - 1 };
    v.add_score(5);
    assert_eq!(v.score, u32::MAX);
    v.take_damage(2);
    assert_eq!(v.health, 1);
}
