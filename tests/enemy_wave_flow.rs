//! Drives the public enemy API the way the fixed step does, without an `App`:
//! a spawner feeding enemies that chase a stationary player and get shot down.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shape_swarm::common::geometry::HitVolume;
use shape_swarm::plugins::effects::{Effect, SoundCue};
use shape_swarm::plugins::enemies::combat::{tick_enemy, PlayerTarget, Projectile};
use shape_swarm::plugins::enemies::spawner::EnemySpawner;
use shape_swarm::plugins::enemies::{Enemy, EnemyTunables, SpawnerTunables};
use shape_swarm::plugins::player::PlayerVitals;

/// A turret shot parked on the player: anything that reaches the player gets hit.
struct Shot {
    rect: Rect,
    spent: bool,
}

impl Projectile for &mut Shot {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn destroy(&mut self) {
        self.spent = true;
    }
}

struct Live {
    enemy: Enemy,
    pos: Vec2,
}

#[test]
fn enemies_close_in_trade_damage_and_die() {
    let tunables = EnemyTunables::default();
    let mut spawner = EnemySpawner::new(SpawnerTunables::default()).expect("default tuning is valid");
    let mut rng = StdRng::seed_from_u64(2024);

    let player_pos = Vec2::ZERO;
    let player_hv = HitVolume::new(Vec2::splat(24.0));
    let mut vitals = PlayerVitals::new(1_000);
    let mut fx: Vec<Effect> = Vec::new();
    let mut live: Vec<Live> = Vec::new();
    let mut spawned = 0;
    let mut kills = 0;
    let mut expected_score = 0;

    for _tick in 0..6_000 {
        if let Some(order) = spawner.tick(1.0, live.len(), player_pos, &mut rng) {
            let tuning = tunables.variant(order.variant);
            live.push(Live {
                enemy: Enemy::spawn(order.variant, tuning, tunables.contact_cooldown, &mut rng),
                pos: order.position,
            });
            spawned += 1;
        }

        // One fresh shot on the player each tick.
        let mut shots = vec![Shot {
            rect: Rect::from_center_size(player_pos, Vec2::splat(8.0)),
            spent: false,
        }];

        live.retain_mut(|l| {
            let mut player = PlayerTarget {
                position: player_pos,
                hit_volume: player_hv.at(player_pos),
                vitals: &mut vitals,
            };
            let available = shots.iter_mut().filter(|s| !s.spent);
            let report = tick_enemy(&mut l.enemy, &mut l.pos, 1.0, available, &mut player, &mut fx);
            if report.killed {
                kills += 1;
                expected_score += l.enemy.score_weight();
            }
            !report.killed
        });

        assert!(live.len() <= 10);
    }

    assert!(spawned > 50, "only {spawned} spawns");
    assert!(kills > 0);
    assert_eq!(vitals.score, expected_score);

    let explosions = fx.iter().filter(|e| **e == Effect::Sound(SoundCue::Explosion)).count();
    assert_eq!(explosions, kills);

    // Enemies only die at the player, so contact damage was traded along the way.
    assert!(vitals.health < 1_000);
}
