use scrollhero_core::geom::Rect;

use crate::config::GameConfig;
use crate::player::{self, PlayerState};

/// Enemy payload: constant leftward speed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyState {
    pub speed: f32,
}

/// Projectile payload: constant rightward speed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileState {
    pub speed: f32,
}

/// Variant payload of a simulation entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Player(PlayerState),
    Enemy(EnemyState),
    Projectile(ProjectileState),
    Booster,
}

/// A movable object in the simulation: bounding box plus variant payload.
/// Liveness is tracked by the owning arena slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub rect: Rect,
    pub kind: EntityKind,
}

impl Entity {
    /// Advance one tick, dispatched by variant.
    ///
    /// Returns false once the entity has fully left the visible
    /// horizontal range and should be killed. The player and boosters
    /// never leave the screen this way.
    pub fn update(&mut self, config: &GameConfig) -> bool {
        match &mut self.kind {
            EntityKind::Player(p) => {
                player::integrate(&mut self.rect, p, config.ground_level());
                true
            },
            EntityKind::Enemy(e) => {
                self.rect.x -= e.speed;
                self.rect.right() >= 0.0
            },
            EntityKind::Projectile(p) => {
                self.rect.x += p.speed;
                self.rect.left() <= config.screen_w
            },
            EntityKind::Booster => true,
        }
    }

    pub fn as_player(&self) -> Option<&PlayerState> {
        match &self.kind {
            EntityKind::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.kind {
            EntityKind::Player(p) => Some(p),
            _ => None,
        }
    }
}
