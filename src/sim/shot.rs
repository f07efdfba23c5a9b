//! Projectiles fired by the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Circular};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub body: Body,
    /// Orientation for rendering; motion comes from `body.vel`
    pub heading: f32,
}

impl Shot {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, heading: f32) -> Self {
        Self {
            id,
            body: Body::new(pos, vel, radius),
            heading,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }

    /// True once the whole shot has left the `width` x `height` screen
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        let Body { pos, radius, .. } = self.body;
        pos.x + radius < 0.0 || pos.y + radius < 0.0 || pos.x - radius > width || pos.y - radius > height
    }
}

impl Circular for Shot {
    fn body(&self) -> &Body {
        &self.body
    }
}
