//! Simulation tick
//!
//! Order within a tick:
//! 1. fire (edge-triggered) and advance every entity plus the field spawner
//! 2. player vs asteroids, at most one hit
//! 3. shots vs asteroids, each shot destroys at most one asteroid
//! 4. reap finished explosions and off-screen entities
//! 5. game over once the last life is lost

use glam::Vec2;

use super::asteroid::{AsteroidSize, AsteroidSpawn, SplitOutcome};
use super::body::Circular;
use super::player::{PlayerTransition, Steering};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::tuning::ShotBounds;

/// Input commands for a single tick
///
/// Movement flags are level-triggered (held keys); `fire` and `pause` are
/// one-shot and should be cleared by the caller after one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub fire: bool,
    pub pause: bool,
}

impl TickInput {
    pub fn steering(&self) -> Steering {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Steering {
            turn: axis(self.rotate_left, self.rotate_right),
            thrust: axis(self.thrust_backward, self.thrust_forward),
        }
    }

    /// Drop the one-shot flags after they have been consumed
    pub fn clear_one_shots(&mut self) {
        self.fire = false;
        self.pause = false;
    }
}

/// Advance the world by `dt` seconds. Returns the phase after the tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> GamePhase {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return state.phase;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return state.phase;
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    if input.fire {
        fire(state);
    }

    advance(state, input, dt);

    let lives_left = resolve_player_hit(state);
    resolve_shot_hits(state);
    reap(state);

    if lives_left == Some(0) {
        state.phase = GamePhase::GameOver;
        let score = state.score;
        state.emit(GameEvent::GameOver { score });
        log::info!("Game over: score {} after {:.1}s", score, state.elapsed);
    }

    state.phase
}

fn fire(state: &mut GameState) {
    if !state.player.can_shoot() {
        return;
    }
    let id = state.next_entity_id();
    if let Some(shot) = state.player.try_shoot(id, &state.tuning) {
        state.shots.push(shot);
        state.emit(GameEvent::ShotFired);
    }
}

fn advance(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.player.update(dt, input.steering(), &state.tuning) {
        Some(PlayerTransition::Respawned) => state.emit(GameEvent::PlayerRespawned),
        Some(PlayerTransition::InvincibilityEnded) => state.emit(GameEvent::InvincibilityEnded),
        None => {}
    }

    for shot in &mut state.shots {
        shot.update(dt);
    }
    for asteroid in &mut state.asteroids {
        asteroid.update(dt);
    }

    if let Some(spawn) = state.field.update(dt, &mut state.rng, &state.tuning) {
        insert_asteroid(state, spawn);
    }
}

fn insert_asteroid(state: &mut GameState, spawn: AsteroidSpawn) {
    let id = state.spawn_asteroid(spawn);
    let size = AsteroidSize::from_tier(spawn.tier, state.tuning.asteroid_kinds);
    log::debug!("Asteroid {} ({}) spawned at {:?}", id, size.as_str(), spawn.pos);
    state.emit(GameEvent::AsteroidSpawned { size });
}

/// First colliding active asteroid wins; returns remaining lives on a hit
fn resolve_player_hit(state: &mut GameState) -> Option<u32> {
    if !state.player.is_collidable() {
        return None;
    }
    let player = &state.player;
    let hit = state
        .asteroids
        .iter()
        .find(|a| a.is_active() && player.collides_with(*a))
        .map(|a| a.id)?;

    let remaining = state.player.on_hit(&state.tuning)?;
    log::info!("Player hit by asteroid {}: {} lives left", hit, remaining);
    state.emit(GameEvent::PlayerExploded);
    state.emit(GameEvent::LifeLost { remaining });
    Some(remaining)
}

fn resolve_shot_hits(state: &mut GameState) {
    let tuning = &state.tuning;
    let rng = &mut state.rng;
    let asteroids = &mut state.asteroids;
    let mut exploded = Vec::new();
    let mut fragments = Vec::new();

    state.shots.retain(|shot| {
        let Some(asteroid) = asteroids
            .iter_mut()
            .find(|a| a.is_active() && shot.collides_with(&**a))
        else {
            return true;
        };
        exploded.push(asteroid.size(tuning));
        if let SplitOutcome::Fragmented(children) = asteroid.split(rng, tuning) {
            fragments.extend(children);
        }
        false
    });

    state.score += exploded.len() as u64 * state.tuning.score_per_hit;
    for size in exploded {
        state.emit(GameEvent::AsteroidExploded { size });
    }
    for fragment in fragments {
        let id = state.spawn_asteroid(fragment);
        log::debug!("Fragment {} (tier {}) split off at {:?}", id, fragment.tier, fragment.pos);
    }
}

fn reap(state: &mut GameState) {
    let tuning = &state.tuning;
    let (w, h) = (tuning.screen_width, tuning.screen_height);

    if tuning.shot_bounds == ShotBounds::Despawn {
        state.shots.retain(|s| !s.is_off_screen(w, h));
    }

    let margin = tuning.asteroid_cull_margin;
    let beyond = |p: Vec2| p.x < -margin || p.y < -margin || p.x > w + margin || p.y > h + margin;
    state
        .asteroids
        .retain(|a| !a.is_finished() && !(a.is_active() && beyond(a.pos())));
}

/// Converts variable frame times into a whole number of fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `SIM_DT` ticks to run for a frame that took `frame_dt` seconds
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of spiralling
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}
