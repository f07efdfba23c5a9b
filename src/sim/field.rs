//! Timed asteroid spawner
//!
//! Every `asteroid_spawn_interval` seconds one asteroid appears just beyond a
//! random screen edge, heading roughly inward.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::AsteroidSpawn;
use crate::rotate_deg;
use crate::tuning::Tuning;

/// The four spawn emitters, one per screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit vector pointing into the screen
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Right => Vec2::NEG_X,
            Edge::Top => Vec2::Y,
            Edge::Bottom => Vec2::NEG_Y,
        }
    }

    /// Point along the edge for `t` in [0, 1], pushed out by the max radius
    pub fn position(self, t: f32, tuning: &Tuning) -> Vec2 {
        let (w, h, r) = (tuning.screen_width, tuning.screen_height, tuning.asteroid_max_radius);
        match self {
            Edge::Left => Vec2::new(-r, t * h),
            Edge::Right => Vec2::new(w + r, t * h),
            Edge::Top => Vec2::new(t * w, -r),
            Edge::Bottom => Vec2::new(t * w, h + r),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsteroidField {
    pub spawn_timer: f32,
}

impl AsteroidField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate time; returns a spawn once the interval has been exceeded
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng, tuning: &Tuning) -> Option<AsteroidSpawn> {
        self.spawn_timer += dt;
        if self.spawn_timer <= tuning.asteroid_spawn_interval {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(Self::roll(rng, tuning))
    }

    fn roll(rng: &mut impl Rng, tuning: &Tuning) -> AsteroidSpawn {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        // Speed and jitter are continuous draws, not whole numbers
        let speed = rng.random_range(tuning.asteroid_speed_min..=tuning.asteroid_speed_max);
        let jitter = rng.random_range(-tuning.asteroid_spawn_jitter..=tuning.asteroid_spawn_jitter);
        let vel = rotate_deg(edge.inward() * speed, jitter);
        let pos = edge.position(rng.random_range(0.0..=1.0), tuning);
        let tier = rng.random_range(1..=tuning.asteroid_kinds);
        AsteroidSpawn { pos, vel, tier }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_after_interval_exceeded() {
        let tuning = Tuning {
            asteroid_spawn_interval: 2.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = AsteroidField::new();

        assert!(field.update(1.0, &mut rng, &tuning).is_none());
        assert_eq!(field.spawn_timer, 1.0);
        assert!(field.update(1.5, &mut rng, &tuning).is_some());
        assert_eq!(field.spawn_timer, 0.0);
    }

    #[test]
    fn test_exact_interval_does_not_spawn() {
        let tuning = Tuning {
            asteroid_spawn_interval: 2.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = AsteroidField::new();
        assert!(field.update(2.0, &mut rng, &tuning).is_none());
    }

    #[test]
    fn test_spawns_are_off_screen_and_inbound() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let max_jitter = tuning.asteroid_spawn_jitter.to_radians().cos();

        for _ in 0..500 {
            let spawn = AsteroidField::roll(&mut rng, &tuning);
            let p = spawn.pos;
            let off_x = p.x <= -tuning.asteroid_max_radius || p.x >= tuning.screen_width + tuning.asteroid_max_radius;
            let off_y = p.y <= -tuning.asteroid_max_radius || p.y >= tuning.screen_height + tuning.asteroid_max_radius;
            assert!(off_x || off_y, "spawn {p:?} is on screen");

            let speed = spawn.vel.length();
            assert!(speed >= tuning.asteroid_speed_min - 1e-3 && speed <= tuning.asteroid_speed_max + 1e-3);
            assert!((1..=tuning.asteroid_kinds).contains(&spawn.tier));

            // Heading stays within the jitter cone around the inward normal
            let to_center = tuning.screen_center() - p;
            let edge_inward = if off_x {
                Vec2::new(to_center.x.signum(), 0.0)
            } else {
                Vec2::new(0.0, to_center.y.signum())
            };
            assert!(spawn.vel.normalize().dot(edge_inward) >= max_jitter - 1e-4);
        }
    }
}
