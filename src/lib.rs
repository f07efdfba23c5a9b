//! Rock Splitter - a splitting-asteroids arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Leaderboard persisted as JSON
//! - `error`: Error types for the loading surfaces

pub mod error;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, HighScoreError};
pub use highscores::HighScores;
pub use tuning::{ShotBounds, Tuning};

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_TURN_SPEED: f32 = 300.0; // degrees per second
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
    pub const PLAYER_LIVES: u32 = 3;
    pub const PLAYER_INVINCIBILITY: f32 = 3.0;

    /// Shot defaults
    pub const SHOT_RADIUS: f32 = 5.0;

    /// Asteroid defaults
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_KINDS: u32 = 3;
    pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
    pub const ASTEROID_SPAWN_RATE: f32 = 0.8; // seconds
    pub const ASTEROID_SPEED_MIN: f32 = 40.0;
    pub const ASTEROID_SPEED_MAX: f32 = 100.0;
    pub const ASTEROID_SPAWN_JITTER: f32 = 30.0; // degrees
    pub const SPLIT_ANGLE_MIN: f32 = 20.0; // degrees
    pub const SPLIT_ANGLE_MAX: f32 = 50.0; // degrees
    pub const SPLIT_SPEED_FACTOR: f32 = 1.2;

    /// Explosion animations
    pub const PLAYER_EXPLOSION_DURATION: f32 = 1.0;
    pub const PLAYER_EXPLOSION_FRAMES: u32 = 8;
    pub const ASTEROID_EXPLOSION_DURATION: f32 = 0.5;
    pub const ASTEROID_EXPLOSION_FRAMES: u32 = 6;

    /// Points awarded per shot that lands
    pub const SCORE_PER_HIT: u64 = 5;
}

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Rotate a vector counter-clockwise by `degrees`
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit vector for a heading: (0, 1) rotated by `heading` degrees
#[inline]
pub fn forward_vector(heading: f32) -> Vec2 {
    rotate_deg(Vec2::Y, heading)
}

/// Heading (degrees) whose forward vector points along `dir`
#[inline]
pub fn heading_of(dir: Vec2) -> f32 {
    (-dir.x).atan2(dir.y).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_vector_axes() {
        let f = forward_vector(0.0);
        assert!((f - Vec2::Y).length() < 1e-6);

        // Counter-clockwise: (0, 1) rotated 90 degrees is (-1, 0)
        let f = forward_vector(90.0);
        assert!((f - Vec2::new(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_heading_of_inverts_forward_vector() {
        for heading in [-170.0, -90.0, -12.5, 0.0, 45.0, 135.0] {
            let back = heading_of(forward_vector(heading));
            assert!((normalize_degrees(back - heading)).abs() < 1e-3, "{heading} -> {back}");
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-190.0), 170.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(180.0), -180.0);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vec2::new(10.0, 0.0);
        let r = rotate_deg(v, 37.0);
        assert!((r.length() - 10.0).abs() < 1e-4);
    }
}
