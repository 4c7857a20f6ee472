//! Effects plugin: audio cues and particle bursts as buffered messages.
//!
//! Gameplay code never talks to an audio or particle back-end directly. It writes
//! intent through an [`EffectSink`]; in the app that sink is [`MessageEffects`],
//! which forwards to `PlaySound` / `SpawnParticles` messages. Whatever back-end
//! is installed reads those messages. The built-in consumer only logs them.
//!
//! ```text
//! tick_enemies ──EffectSink──> MessageEffects ──> Messages<PlaySound>
//!                                             └─> Messages<SpawnParticles>
//!                                                      │
//!                                   PostUpdate: log_effects, then buffer update
//! ```

use bevy::ecs::message::{MessageReader, MessageWriter, Messages};
use bevy::prelude::*;

/// Named audio cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Enemy took a projectile hit and survived.
    EnemyHit,
    /// Enemy destroyed.
    Explosion,
    /// Enemy struck the player.
    Hit,
}

impl SoundCue {
    /// Asset name the audio back-end resolves.
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::EnemyHit => "enemy_hit",
            SoundCue::Explosion => "explosion",
            SoundCue::Hit => "hit",
        }
    }
}

/// Particle descriptor handed to the particle back-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Spark,
}

/// One visual burst. `count` and `magnitude` are effect intensities, not physics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleBurst {
    pub origin: Vec2,
    pub kind: ParticleKind,
    pub count: u32,
    pub magnitude: u32,
}

impl ParticleBurst {
    pub fn sparks(origin: Vec2, count: u32, magnitude: u32) -> Self {
        Self { origin, kind: ParticleKind::Spark, count, magnitude }
    }
}

#[derive(Message, Clone, Copy, Debug)]
pub struct PlaySound {
    pub cue: SoundCue,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnParticles {
    pub burst: ParticleBurst,
}

/// Fire-and-forget side effects emitted by combat resolution.
pub trait EffectSink {
    fn play_sound(&mut self, cue: SoundCue);
    fn spawn_particles(&mut self, burst: ParticleBurst);
}

/// A recorded side effect, in emission order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Sound(SoundCue),
    Particles(ParticleBurst),
}

/// Recording sink. Used by tests and anywhere effects must be inspected before dispatch.
impl EffectSink for Vec<Effect> {
    fn play_sound(&mut self, cue: SoundCue) {
        self.push(Effect::Sound(cue));
    }

    fn spawn_particles(&mut self, burst: ParticleBurst) {
        self.push(Effect::Particles(burst));
    }
}

/// Sink that writes straight into the message buffers.
pub struct MessageEffects<'a, 'ws, 'wp> {
    pub sounds: &'a mut MessageWriter<'ws, PlaySound>,
    pub particles: &'a mut MessageWriter<'wp, SpawnParticles>,
}

impl EffectSink for MessageEffects<'_, '_, '_> {
    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.write(PlaySound { cue });
    }

    fn spawn_particles(&mut self, burst: ParticleBurst) {
        self.particles.write(SpawnParticles { burst });
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Messages<PlaySound>>();
    app.init_resource::<Messages<SpawnParticles>>();

    app.add_systems(PostUpdate, (log_effects, update_effect_messages).chain());
}

/// Stand-in consumer for the audio and particle back-ends.
fn log_effects(mut sounds: MessageReader<PlaySound>, mut particles: MessageReader<SpawnParticles>) {
    for msg in sounds.read() {
        trace!("sound cue '{}'", msg.cue.name());
    }
    for msg in particles.read() {
        let b = msg.burst;
        trace!("particles {:?} x{} (magnitude {}) at {}", b.kind, b.count, b.magnitude, b.origin);
    }
}

/// Messages are double-buffered; `update()` advances buffers.
fn update_effect_messages(
    mut sounds: ResMut<Messages<PlaySound>>,
    mut particles: ResMut<Messages<SpawnParticles>>,
) {
    sounds.update();
    particles.update();
}

#[cfg(test)]
mod tests;
