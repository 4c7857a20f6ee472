//! ECS glue: adapts bullets and the player to the combat contracts and runs the
//! spawner and per-enemy tick in the fixed step.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::geometry::HitVolume;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::effects::{MessageEffects, PlaySound, SpawnParticles};
use crate::plugins::player::{Player, PlayerVitals};
use crate::plugins::projectiles::components::{Bullet, BulletState, PooledBullet};

use super::combat::{tick_enemy, PlayerTarget, Projectile};
use super::components::{Enemy, HealthBar, HealthBarPart, PendingDespawn};
use super::spawner::{EnemySpawner, SpawnOrder, SpawnRng};
use super::tuning::EnemyTunables;

const BAR_SIZE: Vec2 = Vec2::new(30.0, 5.0);
/// Gap between the top of the sprite and the bottom of the bar.
const BAR_GAP: f32 = 10.0;
const BAR_BACK: Color = Color::srgb(0.19, 0.38, 0.19);
const BAR_FILL: Color = Color::srgb(0.55, 0.67, 0.06);

/// An active pooled bullet seen through the `Projectile` contract.
struct BulletProbe<'w> {
    bounds: Rect,
    state: Mut<'w, BulletState>,
}

impl Projectile for BulletProbe<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn destroy(&mut self) {
        *self.state = BulletState::PendingReturn;
    }
}

/// Population control. Runs before the enemy tick.
pub fn spawn_enemies(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    enemy_tunables: Res<EnemyTunables>,
    spawner: Option<ResMut<EnemySpawner>>,
    mut rng: ResMut<SpawnRng>,
    q_live: Query<(), (With<Enemy>, Without<PendingDespawn>)>,
    q_player: Query<&Transform, With<Player>>,
) {
    // Missing spawner means the tuning was rejected at startup.
    let Some(mut spawner) = spawner else { return; };

    let dt = tunables.time_units(time.delta_secs());
    let anchor = q_player
        .single()
        .map(|tf| tf.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    let live = q_live.iter().count();
    if let Some(order) = spawner.tick(dt, live, anchor, &mut rng.0) {
        let e = spawn_enemy(&mut commands, order, &enemy_tunables, &mut rng);
        debug!("spawned {} {e} at {} ({} alive)", order.variant.name(), order.position, live + 1);
    }
}

/// Create an enemy and its health-bar sprites.
pub fn spawn_enemy(
    commands: &mut Commands,
    order: SpawnOrder,
    tunables: &EnemyTunables,
    rng: &mut SpawnRng,
) -> Entity {
    let tuning = tunables.variant(order.variant);
    let enemy = Enemy::spawn(order.variant, tuning, tunables.contact_cooldown, &mut rng.0);
    let bar_origin = order.position.extend(3.0);

    let back = commands
        .spawn((
            Name::new("EnemyHealthBarBack"),
            HealthBarPart,
            Sprite::from_color(BAR_BACK, BAR_SIZE),
            Transform::from_translation(bar_origin),
            DespawnOnExit(GameState::InGame),
        ))
        .id();
    let fill = commands
        .spawn((
            Name::new("EnemyHealthBarFill"),
            HealthBarPart,
            Sprite::from_color(BAR_FILL, BAR_SIZE),
            Transform::from_translation(bar_origin + Vec3::Z * 0.1),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands
        .spawn((
            Name::new(format!("Enemy{}", order.variant.name())),
            Sprite {
                color: tuning.color,
                custom_size: Some(enemy.visual_size()),
                ..default()
            },
            Transform::from_translation(order.position.extend(1.0)),
            HealthBar { ratio: enemy.health_ratio(), back, fill },
            enemy,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// One fixed-step tick for every live enemy, in query order.
///
/// A bullet destroyed by one enemy is `PendingReturn` before the next enemy looks,
/// so it can never hit twice.
pub fn tick_enemies(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q_enemies: Query<(Entity, &mut Enemy, &mut Transform, &mut HealthBar), (Without<PendingDespawn>, Without<Player>)>,
    mut q_bullets: Query<(&Bullet, &Transform, &mut BulletState), (With<PooledBullet>, Without<Enemy>)>,
    mut q_player: Query<(&Transform, &HitVolume, &mut PlayerVitals), (With<Player>, Without<Enemy>)>,
    mut sounds: MessageWriter<PlaySound>,
    mut particles: MessageWriter<SpawnParticles>,
) {
    let Ok((player_tf, player_hv, mut vitals)) = q_player.single_mut() else {
        return;
    };
    let dt = tunables.time_units(time.delta_secs());

    let player_pos = player_tf.translation.truncate();
    let mut player = PlayerTarget {
        position: player_pos,
        hit_volume: player_hv.at(player_pos),
        vitals: &mut *vitals,
    };
    let mut fx = MessageEffects { sounds: &mut sounds, particles: &mut particles };

    for (e, mut enemy, mut tf, mut bar) in &mut q_enemies {
        let mut pos = tf.translation.truncate();

        let projectiles = q_bullets
            .iter_mut()
            .filter(|(_, _, state)| **state == BulletState::Active)
            .map(|(bullet, bullet_tf, state)| BulletProbe {
                bounds: bullet.bounds(bullet_tf.translation.truncate()),
                state,
            });

        let report = tick_enemy(&mut *enemy, &mut pos, dt, projectiles, &mut player, &mut fx);

        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
        bar.ratio = report.health_ratio;

        if report.killed {
            debug!("{} {e} destroyed (+{} score)", enemy.variant().name(), enemy.score_weight());
            commands.entity(e).insert(PendingDespawn);
            continue;
        }
        if report.struck_player {
            debug!(
                "{} {e} hit the player for {} (health {})",
                enemy.variant().name(),
                enemy.damage(),
                player.vitals.health
            );
        }
        if report.became_engaging {
            trace!("{} {e} engaging again", enemy.variant().name());
        }
    }
}

/// Place and size health-bar sprites from the last reported ratio.
pub fn sync_health_bars(
    q_enemies: Query<(&Enemy, &Transform, &HealthBar)>,
    mut q_parts: Query<(&mut Transform, &mut Sprite), (With<HealthBarPart>, Without<Enemy>)>,
) {
    for (enemy, tf, bar) in &q_enemies {
        let center = tf.translation.truncate();
        let y = center.y + enemy.visual_size().y * 0.5 + BAR_GAP - BAR_SIZE.y * 0.5;
        let left = center.x - BAR_SIZE.x * 0.5;

        if let Ok((mut part_tf, _)) = q_parts.get_mut(bar.back) {
            part_tf.translation.x = center.x;
            part_tf.translation.y = y;
        }

        if let Ok((mut part_tf, mut sprite)) = q_parts.get_mut(bar.fill) {
            let width = BAR_SIZE.x * bar.ratio.clamp(0.0, 1.0);
            part_tf.translation.x = left + width * 0.5;
            part_tf.translation.y = y;
            sprite.custom_size = Some(Vec2::new(width, BAR_SIZE.y));
        }
    }
}

/// Despawn enemies marked for removal, together with their bar sprites.
///
/// Centralizing despawn in one system keeps structural changes predictable.
pub fn despawn_marked_enemies(
    mut commands: Commands,
    q: Query<(Entity, Option<&HealthBar>), With<PendingDespawn>>,
) {
    for (e, bar) in &q {
        if let Some(bar) = bar {
            commands.entity(bar.back).despawn();
            commands.entity(bar.fill).despawn();
        }
        commands.entity(e).despawn();
    }
}
