//! Asteroids and the splitting rule
//!
//! An asteroid's radius is always `tier * min_radius`. Splitting a tier-N rock
//! (N > 1) yields two tier-(N-1) fragments at the same spot, flung off at
//! plus and minus one random angle and 1.2x the parent's speed.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::anim::Explosion;
use super::body::{Body, Circular};
use crate::rotate_deg;
use crate::tuning::Tuning;

/// Size class used for scoring, audio and sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub fn from_tier(tier: u32, kinds: u32) -> Self {
        if tier >= kinds && kinds > 1 {
            AsteroidSize::Large
        } else if tier <= 1 {
            AsteroidSize::Small
        } else {
            AsteroidSize::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Small => "small",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AsteroidState {
    Active,
    /// Not collidable, frozen, removed once the explosion finishes
    Exploding(Explosion),
}

/// Everything needed to put a new asteroid into the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: u32,
}

/// Result of [`Asteroid::split`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitOutcome {
    /// Already exploding; nothing changed
    Ignored,
    /// Smallest tier: exploded without fragments
    Destroyed,
    /// Exploded and produced two fragments
    Fragmented([AsteroidSpawn; 2]),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: Body,
    /// 1 = smallest; radius is `tier * min_radius`
    pub tier: u32,
    pub state: AsteroidState,
}

impl Asteroid {
    pub fn new(id: u32, spawn: AsteroidSpawn, tuning: &Tuning) -> Self {
        debug_assert!(
            (1..=tuning.asteroid_kinds).contains(&spawn.tier),
            "asteroid tier {} out of range",
            spawn.tier
        );
        Self {
            id,
            body: Body::new(spawn.pos, spawn.vel, tuning.asteroid_radius(spawn.tier)),
            tier: spawn.tier,
            state: AsteroidState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == AsteroidState::Active
    }

    /// Explosion has played out and the asteroid can be dropped
    pub fn is_finished(&self) -> bool {
        matches!(self.state, AsteroidState::Exploding(ex) if ex.is_finished())
    }

    pub fn size(&self, tuning: &Tuning) -> AsteroidSize {
        AsteroidSize::from_tier(self.tier, tuning.asteroid_kinds)
    }

    pub fn update(&mut self, dt: f32) {
        match &mut self.state {
            AsteroidState::Active => self.body.integrate(dt),
            AsteroidState::Exploding(explosion) => explosion.advance(dt),
        }
    }

    /// Blow the asteroid up, producing fragments unless it is the smallest tier
    pub fn split(&mut self, rng: &mut impl Rng, tuning: &Tuning) -> SplitOutcome {
        if !self.is_active() {
            return SplitOutcome::Ignored;
        }
        self.state = AsteroidState::Exploding(Explosion::new(tuning.asteroid_explosion_duration));

        if self.tier <= 1 {
            return SplitOutcome::Destroyed;
        }

        let angle = rng.random_range(tuning.split_angle_min..=tuning.split_angle_max);
        let tier = self.tier - 1;
        let pos = self.body.pos;
        let fragment = |degrees: f32| AsteroidSpawn {
            pos,
            vel: rotate_deg(self.body.vel, degrees) * tuning.split_speed_factor,
            tier,
        };
        SplitOutcome::Fragmented([fragment(angle), fragment(-angle)])
    }
}

impl Circular for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }
}
