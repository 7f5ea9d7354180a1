/// Score awarded for destroying an enemy with a projectile.
pub const SHOT_SCORE: u32 = 10;
/// Score awarded for stomping an enemy.
pub const STOMP_SCORE: u32 = 10;
/// Health restored by a booster pickup.
pub const BOOST_HEAL: i32 = 20;
/// Health lost per overlapping enemy per tick.
pub const HIT_DAMAGE: i32 = 1;
/// Health ceiling.
pub const MAX_HEALTH: i32 = 100;

/// Health after a booster pickup, clamped to the ceiling.
pub fn boosted_health(health: i32) -> i32 {
    (health + BOOST_HEAL).min(MAX_HEALTH)
}

/// Health after one enemy hit, floored at zero.
pub fn hit_health(health: i32) -> i32 {
    (health - HIT_DAMAGE).max(0)
}
