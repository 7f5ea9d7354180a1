use serde::{Deserialize, Serialize};

/// Events emitted by the simulation during a tick (scoring, damage,
/// level progression, terminal state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile destroyed an enemy. Carries the score after the hit.
    EnemyShot { score: u32 },
    /// The player stomped an enemy from above. Carries the score after.
    EnemyStomped { score: u32 },
    /// The player picked up a booster. Carries the clamped health after.
    BoosterCollected { health: i32 },
    /// An enemy hit the player. Carries the health after the hit.
    PlayerHit { health: i32 },
    /// The last enemy of the wave died or left the screen.
    LevelCleared { level: u32 },
    /// Health reached zero; the session is over. Carries the final score.
    GameOver { score: u32 },
}
