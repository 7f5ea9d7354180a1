use scrollhero_core::geom::Rect;
use scrollhero_core::input::TickInput;

use crate::config::PlayerConfig;
use crate::scoring::MAX_HEALTH;

/// Vertical velocity granted by a stomp bounce (negative = upward).
pub const BOUNCE_VELOCITY: f32 = -10.0;

/// Player-specific simulation state. The bounding box lives on the
/// owning entity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Horizontal step per tick while a direction key is held.
    pub speed: f32,
    /// Initial jump velocity (negative = upward).
    pub jump_speed: f32,
    /// Downward acceleration per tick while airborne.
    pub gravity: f32,
    pub velocity_y: f32,
    pub is_jumping: bool,
    pub health: i32,
    pub score: u32,
}

impl PlayerState {
    pub fn new(cfg: &PlayerConfig) -> Self {
        Self {
            speed: cfg.speed,
            jump_speed: cfg.jump_speed,
            gravity: cfg.gravity,
            velocity_y: 0.0,
            is_jumping: false,
            health: MAX_HEALTH,
            score: 0,
        }
    }

    /// Begin a jump. No-op while already airborne.
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.is_jumping = true;
            self.velocity_y = self.jump_speed;
        }
    }

    /// Stomp bounce: re-arm the jump state with a small upward velocity
    /// so the bounce plays out as an automatic short hop.
    pub fn bounce(&mut self) {
        self.is_jumping = true;
        self.velocity_y = BOUNCE_VELOCITY;
    }
}

/// Apply held-direction movement. Both directions may apply in the same
/// tick; they cancel numerically rather than excluding each other.
pub fn apply_move(rect: &mut Rect, player: &PlayerState, input: &TickInput) {
    if input.left {
        rect.x -= player.speed;
    }
    if input.right {
        rect.x += player.speed;
    }
}

/// Vertical physics for one tick: gravity, velocity, ground clamp.
///
/// Only acts while the player is airborne; a grounded player stays
/// pinned to the ground line. Landing clamps the bottom edge to the
/// ground and zeroes the vertical state so a grounded player never
/// registers as falling.
pub fn integrate(rect: &mut Rect, player: &mut PlayerState, ground: f32) {
    if !player.is_jumping {
        return;
    }
    player.velocity_y += player.gravity;
    rect.y += player.velocity_y;
    if rect.bottom() >= ground {
        rect.set_bottom(ground);
        player.is_jumping = false;
        player.velocity_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;

    fn grounded_player(ground: f32) -> (Rect, PlayerState) {
        let cfg = PlayerConfig::default();
        let mut rect = Rect::new(cfg.start_x, 0.0, cfg.size, cfg.size);
        rect.set_bottom(ground);
        (rect, PlayerState::new(&cfg))
    }

    #[test]
    fn jump_sets_upward_velocity() {
        let (_, mut player) = grounded_player(500.0);
        player.jump();
        assert!(player.is_jumping);
        assert_eq!(player.velocity_y, -15.0);
    }

    #[test]
    fn jump_is_noop_while_airborne() {
        let (_, mut player) = grounded_player(500.0);
        player.jump();
        player.velocity_y = 5.0; // falling
        player.jump();
        assert_eq!(player.velocity_y, 5.0, "mid-air jump must not re-launch");
    }

    #[test]
    fn integrate_is_noop_when_grounded() {
        let (mut rect, mut player) = grounded_player(500.0);
        let before = rect;
        integrate(&mut rect, &mut player, 500.0);
        assert_eq!(rect, before);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn gravity_decelerates_then_reverses_jump() {
        let (mut rect, mut player) = grounded_player(500.0);
        player.jump();
        let start_y = rect.y;
        integrate(&mut rect, &mut player, 500.0);
        assert!(rect.y < start_y, "first tick of a jump moves up");
        assert_eq!(player.velocity_y, -14.0);

        // Gravity eventually turns the velocity downward.
        for _ in 0..20 {
            integrate(&mut rect, &mut player, 500.0);
            if !player.is_jumping {
                break;
            }
        }
        assert!(!player.is_jumping, "jump arc must end back on the ground");
    }

    #[test]
    fn landing_clamps_to_ground_and_zeroes_velocity() {
        let (mut rect, mut player) = grounded_player(500.0);
        player.jump();
        for _ in 0..100 {
            integrate(&mut rect, &mut player, 500.0);
            if !player.is_jumping {
                break;
            }
        }
        assert_eq!(rect.bottom(), 500.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.is_jumping);
    }

    #[test]
    fn bounce_rearms_jump_with_fixed_velocity() {
        let (_, mut player) = grounded_player(500.0);
        player.jump();
        player.velocity_y = 8.0; // falling onto an enemy
        player.bounce();
        assert!(player.is_jumping);
        assert_eq!(player.velocity_y, BOUNCE_VELOCITY);
    }

    #[test]
    fn move_left_and_right_cancel() {
        let (mut rect, player) = grounded_player(500.0);
        let x0 = rect.x;
        apply_move(
            &mut rect,
            &player,
            &TickInput {
                left: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(rect.x, x0, "both directions held must cancel numerically");
    }

    #[test]
    fn move_steps_by_player_speed() {
        let (mut rect, player) = grounded_player(500.0);
        let x0 = rect.x;
        apply_move(
            &mut rect,
            &player,
            &TickInput {
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(rect.x, x0 + player.speed);
        apply_move(
            &mut rect,
            &player,
            &TickInput {
                left: true,
                ..Default::default()
            },
        );
        assert_eq!(rect.x, x0);
    }
}
