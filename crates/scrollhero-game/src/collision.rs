use scrollhero_core::events::GameEvent;

use crate::scoring::{self, SHOT_SCORE, STOMP_SCORE};
use crate::world::{GameStatus, World};

/// Resolve all collisions for the current tick in a fixed order:
/// projectiles against enemies, then the player against boosters, then
/// the player against enemies. A killed entity is excluded from every
/// later check in the same tick even though its slot is only reclaimed
/// by the end-of-tick sweep.
pub fn resolve(world: &mut World) -> Vec<GameEvent> {
    let mut events = Vec::new();
    resolve_projectiles(world, &mut events);
    resolve_boosters(world, &mut events);
    resolve_enemy_contact(world, &mut events);
    events
}

fn resolve_projectiles(world: &mut World, events: &mut Vec<GameEvent>) {
    let projectiles = world.projectiles.clone();
    let enemies = world.enemies.clone();
    for pid in projectiles {
        let Some(p_rect) = world.entities.get(pid).map(|e| e.rect) else {
            continue;
        };
        for &eid in &enemies {
            let Some(e_rect) = world.entities.get(eid).map(|e| e.rect) else {
                continue;
            };
            if p_rect.overlaps(&e_rect) {
                world.entities.kill(pid);
                world.entities.kill(eid);
                let score = {
                    let (_, player) = world.player_mut();
                    player.score += SHOT_SCORE;
                    player.score
                };
                events.push(GameEvent::EnemyShot { score });
                // One kill per projectile.
                break;
            }
        }
    }
}

fn resolve_boosters(world: &mut World, events: &mut Vec<GameEvent>) {
    let boosters = world.boosters.clone();
    let player_rect = *world.player().0;
    for bid in boosters {
        let Some(b_rect) = world.entities.get(bid).map(|e| e.rect) else {
            continue;
        };
        if player_rect.overlaps(&b_rect) {
            world.entities.kill(bid);
            let health = {
                let (_, player) = world.player_mut();
                player.health = scoring::boosted_health(player.health);
                player.health
            };
            events.push(GameEvent::BoosterCollected { health });
        }
    }
}

fn resolve_enemy_contact(world: &mut World, events: &mut Vec<GameEvent>) {
    let enemies = world.enemies.clone();
    for eid in enemies {
        let Some(e_rect) = world.entities.get(eid).map(|e| e.rect) else {
            continue;
        };
        let (player_rect, falling) = {
            let (rect, state) = world.player();
            (*rect, state.velocity_y > 0.0)
        };
        if !player_rect.overlaps(&e_rect) {
            continue;
        }
        if falling && player_rect.bottom() >= e_rect.top() {
            // Stomp: the enemy dies and the player bounces off its top.
            world.entities.kill(eid);
            let score = {
                let (_, player) = world.player_mut();
                player.bounce();
                player.score += STOMP_SCORE;
                player.score
            };
            events.push(GameEvent::EnemyStomped { score });
        } else {
            let (health, score) = {
                let (_, player) = world.player_mut();
                player.health = scoring::hit_health(player.health);
                (player.health, player.score)
            };
            events.push(GameEvent::PlayerHit { health });
            if health == 0 {
                world.status = GameStatus::GameOver;
                tracing::info!(score, "game over");
                events.push(GameEvent::GameOver { score });
                return;
            }
        }
    }
}
