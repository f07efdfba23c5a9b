//! Game state and core simulation types
//!
//! The world owns every entity collection; entities never register
//! themselves anywhere.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidSize, AsteroidSpawn};
use super::field::AsteroidField;
use super::player::Player;
use super::shot::Shot;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Lives exhausted
    GameOver,
}

/// Discrete things that happened during a tick (audio/HUD triggers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    PlayerExploded,
    LifeLost { remaining: u32 },
    PlayerRespawned,
    InvincibilityEnded,
    AsteroidSpawned { size: AsteroidSize },
    AsteroidExploded { size: AsteroidSize },
    GameOver { score: u64 },
}

/// Complete world state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only source of randomness in the simulation
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds of play (excludes pauses)
    pub elapsed: f32,
    pub phase: GamePhase,
    pub player: Player,
    pub shots: Vec<Shot>,
    pub asteroids: Vec<Asteroid>,
    pub field: AsteroidField,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game with the player at the screen centre
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        debug_assert!(tuning.validate().is_ok(), "invalid tuning: {:?}", tuning.validate());
        let player = Player::new(tuning.screen_center(), &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            time_ticks: 0,
            elapsed: 0.0,
            phase: GamePhase::Playing,
            player,
            shots: Vec::new(),
            asteroids: Vec::new(),
            field: AsteroidField::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Insert an asteroid into the world, returning its ID
    pub fn spawn_asteroid(&mut self, spawn: AsteroidSpawn) -> u32 {
        let id = self.next_entity_id();
        self.asteroids.push(Asteroid::new(id, spawn, &self.tuning));
        id
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        log::trace!("event: {:?}", event);
        self.events.push(event);
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Active (non-exploding) asteroids
    pub fn active_asteroids(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_game() {
        let tuning = Tuning::default();
        let state = GameState::new(1, tuning.clone());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives(), tuning.player_lives);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.body.pos, Vec2::new(640.0, 360.0));
        assert!(state.shots.is_empty());
        assert!(state.asteroids.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid tuning")]
    fn test_invalid_tuning_rejected_at_construction() {
        let tuning = Tuning {
            split_angle_min: 60.0,
            ..Default::default()
        };
        GameState::new(1, tuning);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = GameState::new(1, Tuning::default());
        let spawn = AsteroidSpawn {
            pos: Vec2::ZERO,
            vel: Vec2::X,
            tier: 2,
        };
        let a = state.spawn_asteroid(spawn);
        let b = state.spawn_asteroid(spawn);
        assert_ne!(a, b);
        assert_eq!(state.active_asteroids().count(), 2);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1, Tuning::default());
        state.emit(GameEvent::ShotFired);
        assert_eq!(state.drain_events(), vec![GameEvent::ShotFired]);
        assert!(state.drain_events().is_empty());
    }
}
