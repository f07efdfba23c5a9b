//! The player's ship
//!
//! State machine:
//!
//! ```text
//! Normal --on_hit--> Exploding --animation done--> Invincible --timer--> Normal
//! ```
//!
//! Only `Normal` is collidable. Running out of lives is reported to the world;
//! the ship itself never disappears.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::Explosion;
use super::body::{Body, Circular};
use super::shot::Shot;
use crate::forward_vector;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Steerable, can shoot, collidable
    Normal,
    /// Frozen in place while the explosion plays
    Exploding(Explosion),
    /// Back at the spawn point, immune to hits until `remaining` runs out
    Invincible { remaining: f32 },
}

/// Level-triggered steering for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    /// -1 turns left, +1 turns right, 0 holds heading
    pub turn: f32,
    /// +1 forward, -1 reverse, 0 coast
    pub thrust: f32,
}

/// State changes reported back from [`Player::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTransition {
    Respawned,
    InvincibilityEnded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Degrees; not normalized
    pub heading: f32,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
    pub lives: u32,
    pub state: PlayerState,
    /// Where the ship respawns after exploding
    pub spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(spawn, Vec2::ZERO, tuning.player_radius),
            heading: 0.0,
            shoot_cooldown: 0.0,
            lives: tuning.player_lives,
            state: PlayerState::Normal,
            spawn,
        }
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.state, PlayerState::Exploding(_))
    }

    pub fn is_invincible(&self) -> bool {
        matches!(self.state, PlayerState::Invincible { .. })
    }

    /// Eligible for asteroid collisions this tick
    pub fn is_collidable(&self) -> bool {
        self.state == PlayerState::Normal
    }

    /// Not exploding and the cooldown has run out
    pub fn can_shoot(&self) -> bool {
        !self.is_exploding() && self.shoot_cooldown <= 0.0
    }

    pub fn rotate(&mut self, dt: f32, direction: f32, tuning: &Tuning) {
        self.heading += direction * tuning.player_turn_speed * dt;
    }

    /// Move along the heading; `sign` of -1 reverses
    pub fn thrust(&mut self, dt: f32, sign: f32, tuning: &Tuning) {
        self.body.pos += forward_vector(self.heading) * tuning.player_speed * sign * dt;
    }

    pub fn tick_cooldown(&mut self, dt: f32) {
        self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
    }

    /// Fire a shot if the cooldown allows it.
    ///
    /// The cooldown is reset here and only decays through [`Player::tick_cooldown`],
    /// so a second call in the same tick always fails.
    pub fn try_shoot(&mut self, id: u32, tuning: &Tuning) -> Option<Shot> {
        if !self.can_shoot() {
            return None;
        }
        self.shoot_cooldown = tuning.player_shoot_cooldown;
        let vel = forward_vector(self.heading) * tuning.player_shoot_speed;
        Some(Shot::new(id, self.body.pos, vel, tuning.shot_radius, self.heading))
    }

    /// Register an asteroid hit.
    ///
    /// Returns the remaining lives when the hit counted, `None` when the ship
    /// was already exploding or still invincible.
    pub fn on_hit(&mut self, tuning: &Tuning) -> Option<u32> {
        if !self.is_collidable() {
            return None;
        }
        self.state = PlayerState::Exploding(Explosion::new(tuning.player_explosion_duration));
        self.body.vel = Vec2::ZERO;
        self.lives = self.lives.saturating_sub(1);
        Some(self.lives)
    }

    /// Advance cooldown, steering and the state machine by `dt`
    pub fn update(&mut self, dt: f32, steering: Steering, tuning: &Tuning) -> Option<PlayerTransition> {
        self.tick_cooldown(dt);

        match &mut self.state {
            PlayerState::Exploding(explosion) => {
                explosion.advance(dt);
                if explosion.is_finished() {
                    self.respawn(tuning);
                    return Some(PlayerTransition::Respawned);
                }
                None
            }
            PlayerState::Invincible { remaining } => {
                *remaining -= dt;
                let expired = *remaining <= 0.0;
                self.steer(dt, steering, tuning);
                if expired {
                    self.state = PlayerState::Normal;
                    return Some(PlayerTransition::InvincibilityEnded);
                }
                None
            }
            PlayerState::Normal => {
                self.steer(dt, steering, tuning);
                None
            }
        }
    }

    fn steer(&mut self, dt: f32, steering: Steering, tuning: &Tuning) {
        if steering.turn != 0.0 {
            self.rotate(dt, steering.turn.signum(), tuning);
        }
        if steering.thrust != 0.0 {
            self.thrust(dt, steering.thrust.signum(), tuning);
        }
    }

    fn respawn(&mut self, tuning: &Tuning) {
        self.body.pos = self.spawn;
        self.body.vel = Vec2::ZERO;
        self.heading = 0.0;
        self.state = if tuning.invincibility_duration > 0.0 {
            PlayerState::Invincible {
                remaining: tuning.invincibility_duration,
            }
        } else {
            PlayerState::Normal
        };
        log::debug!("Player respawned at {:?}", self.spawn);
    }
}

impl Circular for Player {
    fn body(&self) -> &Body {
        &self.body
    }
}
