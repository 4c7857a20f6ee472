use bevy::ecs::message::{MessageWriter, Messages};
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;

#[test]
fn cue_names_match_audio_assets() {
    assert_eq!(SoundCue::EnemyHit.name(), "enemy_hit");
    assert_eq!(SoundCue::Explosion.name(), "explosion");
    assert_eq!(SoundCue::Hit.name(), "hit");
}

#[test]
fn recording_sink_keeps_emission_order() {
    let mut fx: Vec<Effect> = Vec::new();
    fx.spawn_particles(ParticleBurst::sparks(Vec2::ONE, 30, 15));
    fx.play_sound(SoundCue::EnemyHit);

    assert_eq!(
        fx,
        vec![
            Effect::Particles(ParticleBurst::sparks(Vec2::ONE, 30, 15)),
            Effect::Sound(SoundCue::EnemyHit),
        ]
    );
}

#[test]
fn plugin_registers_message_buffers() {
    let mut app = App::new();
    plugin(&mut app);
    assert!(app.world().get_resource::<Messages<PlaySound>>().is_some());
    assert!(app.world().get_resource::<Messages<SpawnParticles>>().is_some());
}

fn emit_through_message_sink(
    mut sounds: MessageWriter<PlaySound>,
    mut particles: MessageWriter<SpawnParticles>,
) {
    let mut sink = MessageEffects { sounds: &mut sounds, particles: &mut particles };
    sink.play_sound(SoundCue::Explosion);
    sink.spawn_particles(ParticleBurst::sparks(Vec2::new(4.0, 2.0), 50, 30));
}

#[test]
fn message_sink_writes_messages() {
    let mut world = World::new();
    world.init_resource::<Messages<PlaySound>>();
    world.init_resource::<Messages<SpawnParticles>>();

    run_system_once(&mut world, emit_through_message_sink);

    let sounds: Vec<_> = world.resource_mut::<Messages<PlaySound>>().drain().collect();
    assert_eq!(sounds.len(), 1);
    assert_eq!(sounds[0].cue, SoundCue::Explosion);

    let bursts: Vec<_> = world.resource_mut::<Messages<SpawnParticles>>().drain().collect();
    assert_eq!(bursts.len(), 1);
    assert_eq!(bursts[0].burst.count, 50);
}
