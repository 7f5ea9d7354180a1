use serde::{Deserialize, Serialize};

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels.
    pub screen_w: f32,
    /// Screen height in pixels.
    pub screen_h: f32,
    /// Simulation tick rate in Hz.
    pub tick_rate_hz: f32,
    /// Distance of the ground line above the bottom screen edge.
    pub ground_margin: f32,
    /// Real-time pause on the level-complete overlay, in seconds.
    pub level_pause_secs: f32,
    /// Real-time pause on the game-over overlay, in seconds.
    pub game_over_pause_secs: f32,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub projectile: ProjectileConfig,
    pub booster: BoosterConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_w: 800.0,
            screen_h: 600.0,
            tick_rate_hz: 60.0,
            ground_margin: 100.0,
            level_pause_secs: 2.0,
            game_over_pause_secs: 3.0,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            projectile: ProjectileConfig::default(),
            booster: BoosterConfig::default(),
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line (y grows downward).
    pub fn ground_level(&self) -> f32 {
        self.screen_h - self.ground_margin
    }

    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("SCROLLHERO_CONFIG")
            .unwrap_or_else(|_| "config/scrollhero.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }
}

/// Player dimensions and movement parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: f32,
    pub start_x: f32,
    /// Horizontal step per tick while a direction key is held.
    pub speed: f32,
    /// Initial vertical velocity of a jump (negative = upward).
    pub jump_speed: f32,
    /// Downward acceleration per tick while airborne.
    pub gravity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            start_x: 100.0,
            speed: 5.0,
            jump_speed: -15.0,
            gravity: 1.0,
        }
    }
}

/// Enemy dimensions, speed range, and wave sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: f32,
    /// Inclusive speed range, drawn per enemy (leftward pixels per tick).
    pub speed_min: i32,
    pub speed_max: i32,
    /// Width of the spawn band just past the right screen edge.
    pub spawn_band: i32,
    /// Wave size is `base_count + level * per_level`.
    pub base_count: u32,
    pub per_level: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            speed_min: 3,
            speed_max: 6,
            spawn_band: 100,
            base_count: 5,
            per_level: 2,
        }
    }
}

/// Projectile dimensions and speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub w: f32,
    pub h: f32,
    /// Rightward pixels per tick.
    pub speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            w: 20.0,
            h: 10.0,
            speed: 10.0,
        }
    }
}

/// Booster dimensions and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoosterConfig {
    pub size: f32,
    /// Height of the booster's bottom edge above the ground line.
    pub ground_offset: f32,
}

impl Default for BoosterConfig {
    fn default() -> Self {
        Self {
            size: 30.0,
            ground_offset: 20.0,
        }
    }
}
