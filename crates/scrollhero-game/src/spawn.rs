use rand::Rng;

use scrollhero_core::geom::Rect;

use crate::entity::{EnemyState, Entity, EntityKind};
use crate::world::{GameStatus, World};

/// Advance to the next level: bump the counter, spawn the wave of
/// `base_count + level * per_level` enemies in the band just past the
/// right screen edge, and place exactly one booster.
///
/// Called once at session start to bootstrap level 1, then again by the
/// driver whenever the live-enemy count reaches zero.
pub fn start_new_level<R: Rng>(world: &mut World, rng: &mut R) {
    world.level += 1;
    let count = world.config.enemy.base_count + world.level * world.config.enemy.per_level;
    for _ in 0..count {
        spawn_enemy(world, rng);
    }
    spawn_booster(world, rng);
    world.status = GameStatus::Running;
    tracing::info!(level = world.level, enemies = count, "wave spawned");
}

fn spawn_enemy<R: Rng>(world: &mut World, rng: &mut R) {
    let cfg = &world.config;
    let x = cfg.screen_w + rng.random_range(0..=cfg.enemy.spawn_band) as f32;
    let speed = rng.random_range(cfg.enemy.speed_min..=cfg.enemy.speed_max) as f32;
    let mut rect = Rect::new(x, 0.0, cfg.enemy.size, cfg.enemy.size);
    rect.set_bottom(cfg.ground_level());
    let id = world.entities.insert(Entity {
        rect,
        kind: EntityKind::Enemy(EnemyState { speed }),
    });
    world.enemies.push(id);
}

fn spawn_booster<R: Rng>(world: &mut World, rng: &mut R) {
    let cfg = &world.config;
    let x = rng.random_range(0..=cfg.screen_w as u32) as f32;
    let mut rect = Rect::new(x, 0.0, cfg.booster.size, cfg.booster.size);
    rect.set_bottom(cfg.ground_level() - cfg.booster.ground_offset);
    let id = world.entities.insert(Entity {
        rect,
        kind: EntityKind::Booster,
    });
    world.boosters.push(id);
}
