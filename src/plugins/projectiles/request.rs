//! Producer: turn the held fire button into `SpawnBulletRequest`s.
//!
//! Aiming is a pure function of two points, so it is tested without a window.
//! This system never touches `BulletPool`.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::player::Player;

use super::messages::SpawnBulletRequest;

/// Distance from the player's centre to where a bullet appears.
const MUZZLE_OFFSET: f32 = 18.0;

/// Rate limiter for hold-to-fire.
#[derive(Resource, Debug, Default)]
pub struct FireControl {
    cooldown: f32,
}

impl FireControl {
    /// Advance by `dt` seconds and report whether a shot goes out now.
    pub fn pull(&mut self, dt: f32, held: bool, interval: f32) -> bool {
        self.cooldown = (self.cooldown - dt.max(0.0)).max(0.0);
        if !held || self.cooldown > 0.0 {
            return false;
        }
        self.cooldown = interval.max(0.0);
        true
    }
}

/// Unit direction from `origin` to `target`; straight up when they coincide.
pub fn aim(origin: Vec2, target: Vec2) -> Vec2 {
    let d = target - origin;
    if d.length_squared() < 1e-4 { Vec2::Y } else { d.normalize() }
}

pub fn shot_toward(origin: Vec2, target: Vec2, speed: f32, owner: Option<Entity>) -> SpawnBulletRequest {
    let dir = aim(origin, target);
    SpawnBulletRequest {
        pos: origin + dir * MUZZLE_OFFSET,
        vel: dir * speed,
        owner,
    }
}

fn cursor_in_world(
    windows: &Query<&Window>,
    q_camera: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_tf) = q_camera.single().ok()?;
    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => Some(p),
        Err(e) => {
            debug!("viewport_to_world_2d failed: {e:?}");
            None
        }
    }
}

pub fn request_player_bullets(
    time: Res<Time>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    tunables: Res<Tunables>,
    mut fire: ResMut<FireControl>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_player: Query<(Entity, &Transform), With<Player>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let held = buttons.is_some_and(|b| b.pressed(MouseButton::Left));
    if !fire.pull(time.delta_secs(), held, tunables.fire_interval_secs) {
        return;
    }

    let Ok((player_e, player_tf)) = q_player.single() else {
        return;
    };
    let Some(target) = cursor_in_world(&windows, &q_camera) else {
        trace!("no cursor in world space; shot skipped");
        return;
    };

    let origin = player_tf.translation.truncate();
    writer.write(shot_toward(origin, target, tunables.bullet_speed, Some(player_e)));
}
