use rand::Rng;

use scrollhero_core::arena::{Arena, EntityId};
use scrollhero_core::events::GameEvent;
use scrollhero_core::geom::Rect;
use scrollhero_core::input::TickInput;

use crate::collision;
use crate::config::GameConfig;
use crate::entity::{Entity, EntityKind, ProjectileState};
use crate::player::{self, PlayerState};
use crate::spawn;

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Wave cleared; waiting for the driver to start the next level.
    LevelTransition,
    /// Terminal. No further ticks process gameplay logic.
    GameOver,
}

/// The simulation context for one game session: the entity arena, the
/// per-class handle lists, level counter, and session status. Owned by
/// the driver and passed into each subsystem; nothing here is global.
pub struct World {
    pub config: GameConfig,
    pub entities: Arena<Entity>,
    pub player: EntityId,
    pub enemies: Vec<EntityId>,
    pub projectiles: Vec<EntityId>,
    pub boosters: Vec<EntityId>,
    pub level: u32,
    pub status: GameStatus,
}

impl World {
    /// Create a session with the player on the ground and no wave yet.
    /// Callers bootstrap level 1 with [`World::start_new_level`].
    pub fn new(config: GameConfig) -> Self {
        let mut entities = Arena::new();
        let mut rect = Rect::new(config.player.start_x, 0.0, config.player.size, config.player.size);
        rect.set_bottom(config.ground_level());
        let player = entities.insert(Entity {
            rect,
            kind: EntityKind::Player(PlayerState::new(&config.player)),
        });
        Self {
            config,
            entities,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            boosters: Vec::new(),
            level: 0,
            status: GameStatus::Running,
        }
    }

    /// The player entity is created at session start and never destroyed.
    pub fn player(&self) -> (&Rect, &PlayerState) {
        let entity = self
            .entities
            .get(self.player)
            .expect("player entity is never destroyed");
        let state = entity
            .as_player()
            .expect("player handle always points at the player variant");
        (&entity.rect, state)
    }

    pub fn player_mut(&mut self) -> (&mut Rect, &mut PlayerState) {
        let entity = self
            .entities
            .get_mut(self.player)
            .expect("player entity is never destroyed");
        let rect = &mut entity.rect;
        let state = match &mut entity.kind {
            EntityKind::Player(p) => p,
            _ => unreachable!("player handle always points at the player variant"),
        };
        (rect, state)
    }

    /// Live enemies remaining in the current wave.
    pub fn live_enemies(&self) -> usize {
        self.enemies
            .iter()
            .filter(|&&id| self.entities.is_alive(id))
            .count()
    }

    /// Spawn one projectile at the player's right edge, vertical center.
    /// Every invocation spawns; there is no fire cooldown.
    pub fn shoot(&mut self) {
        let (rect, _) = self.player();
        let spawn = Rect::with_center(
            rect.right(),
            rect.center_y(),
            self.config.projectile.w,
            self.config.projectile.h,
        );
        let speed = self.config.projectile.speed;
        let id = self.entities.insert(Entity {
            rect: spawn,
            kind: EntityKind::Projectile(ProjectileState { speed }),
        });
        self.projectiles.push(id);
    }

    /// Advance the next wave. Leaves the session Running.
    pub fn start_new_level<R: Rng>(&mut self, rng: &mut R) {
        spawn::start_new_level(self, rng);
    }

    /// Advance the simulation one tick: player actions, entity updates,
    /// collision resolution, level check, then the end-of-tick sweep.
    /// Non-Running states are inert.
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if self.status != GameStatus::Running {
            return Vec::new();
        }

        // Player actions.
        {
            let (rect, state) = self.player_mut();
            player::apply_move(rect, state, input);
            if input.jump {
                state.jump();
            }
        }
        if input.shoot {
            self.shoot();
        }

        // Entity updates over a handle snapshot; off-screen entities die.
        for id in self.entities.ids() {
            let off_screen = match self.entities.get_mut(id) {
                Some(entity) => !entity.update(&self.config),
                None => false,
            };
            if off_screen {
                self.entities.kill(id);
            }
        }

        let mut events = collision::resolve(self);

        // Level director: wave exhausted while still running.
        if self.status == GameStatus::Running && self.live_enemies() == 0 {
            self.status = GameStatus::LevelTransition;
            tracing::info!(level = self.level, "level cleared");
            events.push(GameEvent::LevelCleared { level: self.level });
        }

        self.sweep();
        events
    }

    /// End-of-tick compaction: drop dead handles from every tracking
    /// list and reclaim their arena slots in the same pass.
    fn sweep(&mut self) {
        let entities = &self.entities;
        self.enemies.retain(|&id| entities.is_alive(id));
        self.projectiles.retain(|&id| entities.is_alive(id));
        self.boosters.retain(|&id| entities.is_alive(id));
        self.entities.sweep();
    }
}
