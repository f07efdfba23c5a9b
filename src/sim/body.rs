//! Circular physical bodies and the overlap test shared by every entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, velocity and collision radius of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at construction
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self { pos, vel, radius }
    }

    /// Advance position by velocity over `dt` seconds
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// True iff the circles touch or overlap
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) <= self.radius + other.radius
    }
}

/// Anything with a circular body
pub trait Circular {
    fn body(&self) -> &Body;

    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn radius(&self) -> f32 {
        self.body().radius
    }

    fn collides_with(&self, other: &impl Circular) -> bool {
        self.body().overlaps(other.body())
    }
}

impl Circular for Body {
    fn body(&self) -> &Body {
        self
    }
}
