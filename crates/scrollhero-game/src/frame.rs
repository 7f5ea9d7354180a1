use serde::{Deserialize, Serialize};

use scrollhero_core::geom::Rect;

use crate::entity::EntityKind;
use crate::world::World;

/// Sky-blue clear color behind every frame.
pub const BG_COLOR: (u8, u8, u8) = (135, 206, 235);

/// Which sprite class a rectangle belongs to. Renderers map tags to
/// their own visuals; `color` is the stock palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteTag {
    Player,
    Enemy,
    Projectile,
    Booster,
}

impl SpriteTag {
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            SpriteTag::Player => (255, 0, 0),
            SpriteTag::Enemy => (0, 0, 255),
            SpriteTag::Projectile => (0, 255, 0),
            SpriteTag::Booster => (255, 255, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub rect: Rect,
    pub tag: SpriteTag,
}

/// Score, health and level readouts drawn over the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub health: i32,
    pub level: u32,
}

/// A complete renderable snapshot of one tick. Pure data; taking a
/// frame never mutates the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
    /// Center-screen banner, e.g. between levels or at game over.
    pub overlay: Option<String>,
}

/// Snapshot the live entities and HUD state of `world`.
pub fn snapshot(world: &World, overlay: Option<String>) -> Frame {
    let sprites = world
        .entities
        .iter()
        .map(|(_, entity)| {
            let tag = match entity.kind {
                EntityKind::Player(_) => SpriteTag::Player,
                EntityKind::Enemy(_) => SpriteTag::Enemy,
                EntityKind::Projectile(_) => SpriteTag::Projectile,
                EntityKind::Booster => SpriteTag::Booster,
            };
            Sprite {
                rect: entity.rect,
                tag,
            }
        })
        .collect();
    let (_, player) = world.player();
    Frame {
        sprites,
        hud: Hud {
            score: player.score,
            health: player.health,
            level: world.level,
        },
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entity::{EnemyState, Entity};

    #[test]
    fn snapshot_reflects_hud_state() {
        let mut world = World::new(GameConfig::default());
        {
            let (_, player) = world.player_mut();
            player.score = 30;
            player.health = 88;
        }
        world.level = 2;

        let frame = snapshot(&world, None);
        assert_eq!(
            frame.hud,
            Hud {
                score: 30,
                health: 88,
                level: 2
            }
        );
        assert_eq!(frame.sprites.len(), 1);
        assert_eq!(frame.sprites[0].tag, SpriteTag::Player);
        assert!(frame.overlay.is_none());
    }

    #[test]
    fn dead_entities_are_excluded() {
        let mut world = World::new(GameConfig::default());
        let enemy = world.entities.insert(Entity {
            rect: Rect::new(400.0, 460.0, 40.0, 40.0),
            kind: EntityKind::Enemy(EnemyState { speed: 3.0 }),
        });
        world.enemies.push(enemy);

        assert_eq!(snapshot(&world, None).sprites.len(), 2);

        world.entities.kill(enemy);
        let frame = snapshot(&world, None);
        assert_eq!(
            frame.sprites.len(),
            1,
            "killed entities must vanish before the sweep runs"
        );
    }

    #[test]
    fn overlay_text_is_carried_through() {
        let world = World::new(GameConfig::default());
        let frame = snapshot(&world, Some("Level 1 Completed!".to_owned()));
        assert_eq!(frame.overlay.as_deref(), Some("Level 1 Completed!"));
    }

    #[test]
    fn frame_serializes_to_json() {
        let world = World::new(GameConfig::default());
        let frame = snapshot(&world, None);
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }
}
