//! Data-driven game balance
//!
//! Every gameplay constant lives here as a named, overridable parameter.
//! Defaults mirror [`crate::consts`]; a JSON file may override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// What happens to shots that leave the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotBounds {
    /// Remove a shot once it is entirely off-screen
    #[default]
    Despawn,
    /// Let shots fly forever
    Persist,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Degrees per second
    pub player_turn_speed: f32,
    pub player_speed: f32,
    pub player_shoot_speed: f32,
    /// Seconds between shots
    pub player_shoot_cooldown: f32,
    pub player_lives: u32,
    /// Post-respawn grace period (seconds)
    pub invincibility_duration: f32,

    // === Shots ===
    pub shot_radius: f32,
    pub shot_bounds: ShotBounds,

    // === Asteroids ===
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub asteroid_kinds: u32,
    /// Seconds between field spawns
    pub asteroid_spawn_interval: f32,
    pub asteroid_speed_min: f32,
    pub asteroid_speed_max: f32,
    /// Max deviation (degrees) from an edge's inward direction
    pub asteroid_spawn_jitter: f32,
    pub split_angle_min: f32,
    pub split_angle_max: f32,
    pub split_speed_factor: f32,
    /// Distance beyond the screen at which asteroids are culled
    pub asteroid_cull_margin: f32,

    // === Explosions ===
    pub player_explosion_duration: f32,
    pub player_explosion_frames: u32,
    pub asteroid_explosion_duration: f32,
    pub asteroid_explosion_frames: u32,

    // === Scoring ===
    pub score_per_hit: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_speed: PLAYER_SPEED,
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            player_lives: PLAYER_LIVES,
            invincibility_duration: PLAYER_INVINCIBILITY,

            shot_radius: SHOT_RADIUS,
            shot_bounds: ShotBounds::Despawn,

            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_kinds: ASTEROID_KINDS,
            asteroid_spawn_interval: ASTEROID_SPAWN_RATE,
            asteroid_speed_min: ASTEROID_SPEED_MIN,
            asteroid_speed_max: ASTEROID_SPEED_MAX,
            asteroid_spawn_jitter: ASTEROID_SPAWN_JITTER,
            split_angle_min: SPLIT_ANGLE_MIN,
            split_angle_max: SPLIT_ANGLE_MAX,
            split_speed_factor: SPLIT_SPEED_FACTOR,
            asteroid_cull_margin: ASTEROID_MAX_RADIUS * 2.0,

            player_explosion_duration: PLAYER_EXPLOSION_DURATION,
            player_explosion_frames: PLAYER_EXPLOSION_FRAMES,
            asteroid_explosion_duration: ASTEROID_EXPLOSION_DURATION,
            asteroid_explosion_frames: ASTEROID_EXPLOSION_FRAMES,

            score_per_hit: SCORE_PER_HIT,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Screen centre, where the player spawns and respawns
    pub fn screen_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Radius of an asteroid of the given tier (1 = smallest)
    pub fn asteroid_radius(&self, tier: u32) -> f32 {
        tier as f32 * self.asteroid_min_radius
    }

    /// Reject parameter combinations the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_radius", self.player_radius),
            ("shot_radius", self.shot_radius),
            ("asteroid_min_radius", self.asteroid_min_radius),
            ("asteroid_spawn_interval", self.asteroid_spawn_interval),
            ("player_explosion_duration", self.player_explosion_duration),
            ("asteroid_explosion_duration", self.asteroid_explosion_duration),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("player_shoot_cooldown", self.player_shoot_cooldown),
            ("invincibility_duration", self.invincibility_duration),
            ("asteroid_cull_margin", self.asteroid_cull_margin),
            ("asteroid_speed_min", self.asteroid_speed_min),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        if self.player_lives == 0 {
            return Err(ConfigError::Invalid("player_lives must be at least 1".into()));
        }
        if self.asteroid_kinds == 0 {
            return Err(ConfigError::Invalid("asteroid_kinds must be at least 1".into()));
        }
        let expected_max = self.asteroid_radius(self.asteroid_kinds);
        if (self.asteroid_max_radius - expected_max).abs() > 1e-3 {
            return Err(ConfigError::Invalid(format!(
                "asteroid_max_radius ({}) must equal asteroid_kinds x asteroid_min_radius ({expected_max})",
                self.asteroid_max_radius
            )));
        }
        if self.asteroid_cull_margin < self.asteroid_max_radius {
            return Err(ConfigError::Invalid(
                "asteroid_cull_margin must be at least asteroid_max_radius or fresh spawns are culled".into(),
            ));
        }
        if self.asteroid_speed_min > self.asteroid_speed_max {
            return Err(ConfigError::Invalid("asteroid speed range is inverted".into()));
        }
        if self.split_angle_min > self.split_angle_max {
            return Err(ConfigError::Invalid("split angle range is inverted".into()));
        }
        if self.asteroid_spawn_jitter < 0.0 {
            return Err(ConfigError::Invalid("asteroid_spawn_jitter must not be negative".into()));
        }
        if self.player_explosion_frames == 0 || self.asteroid_explosion_frames == 0 {
            return Err(ConfigError::Invalid("explosion frame counts must be at least 1".into()));
        }
        Ok(())
    }
}
