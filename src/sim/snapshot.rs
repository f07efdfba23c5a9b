//! Read-only view of the world for renderers and HUDs
//!
//! The core never draws anything. A renderer walks `drawables` and either
//! picks a sprite (using `frame` while exploding) or falls back to outlines.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::{AsteroidSize, AsteroidState};
use super::player::PlayerState;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawableKind {
    Player,
    Shot,
    Asteroid(AsteroidSize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawable {
    /// 0 for the player
    pub id: u32,
    pub kind: DrawableKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Degrees; asteroids report 0
    pub heading: f32,
    /// Explosion frame, `None` when not exploding
    pub frame: Option<u32>,
    /// Player is in its post-respawn grace period
    pub invincible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub time_ticks: u64,
    pub drawables: Vec<Drawable>,
}

impl GameState {
    /// Everything a renderer needs for the current frame
    pub fn snapshot(&self) -> Snapshot {
        let tuning = &self.tuning;
        let mut drawables = Vec::with_capacity(1 + self.shots.len() + self.asteroids.len());

        let player = &self.player;
        drawables.push(Drawable {
            id: 0,
            kind: DrawableKind::Player,
            pos: player.body.pos,
            radius: player.body.radius,
            heading: player.heading,
            frame: match player.state {
                PlayerState::Exploding(ex) => Some(ex.frame(tuning.player_explosion_frames)),
                _ => None,
            },
            invincible: player.is_invincible(),
        });

        drawables.extend(self.asteroids.iter().map(|a| Drawable {
            id: a.id,
            kind: DrawableKind::Asteroid(a.size(tuning)),
            pos: a.body.pos,
            radius: a.body.radius,
            heading: 0.0,
            frame: match a.state {
                AsteroidState::Exploding(ex) => Some(ex.frame(tuning.asteroid_explosion_frames)),
                AsteroidState::Active => None,
            },
            invincible: false,
        }));

        drawables.extend(self.shots.iter().map(|s| Drawable {
            id: s.id,
            kind: DrawableKind::Shot,
            pos: s.body.pos,
            radius: s.body.radius,
            heading: s.heading,
            frame: None,
            invincible: false,
        }));

        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives(),
            time_ticks: self.time_ticks,
            drawables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::AsteroidSpawn;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_snapshot_lists_every_entity() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_asteroid(AsteroidSpawn {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::ZERO,
            tier: 3,
        });
        let id = state.next_entity_id();
        let shot = state.player.try_shoot(id, &state.tuning).unwrap();
        state.shots.push(shot);

        let snap = state.snapshot();
        assert_eq!(snap.drawables.len(), 3);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.drawables[0].kind, DrawableKind::Player);
        assert_eq!(snap.drawables[1].kind, DrawableKind::Asteroid(AsteroidSize::Large));
        assert_eq!(snap.drawables[1].radius, 60.0);
        assert_eq!(snap.drawables[2].kind, DrawableKind::Shot);
        assert!(snap.drawables.iter().all(|d| d.frame.is_none()));
    }

    #[test]
    fn test_exploding_entities_report_frames() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_asteroid(AsteroidSpawn {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::ZERO,
            tier: 1,
        });
        let mut rng = Pcg32::seed_from_u64(0);
        let tuning = state.tuning.clone();
        state.asteroids[0].split(&mut rng, &tuning);
        state.player.on_hit(&tuning);

        let snap = state.snapshot();
        assert_eq!(snap.drawables[0].frame, Some(0));
        assert_eq!(snap.drawables[1].frame, Some(0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(1, Tuning::default());
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"player\""));
    }
}
