//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the world
//! - Stable iteration order (insertion order of each collection)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod asteroid;
pub mod autopilot;
pub mod body;
pub mod field;
pub mod player;
pub mod shot;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use anim::Explosion;
pub use asteroid::{Asteroid, AsteroidSize, AsteroidSpawn, AsteroidState, SplitOutcome};
pub use body::{Body, Circular};
pub use field::{AsteroidField, Edge};
pub use player::{Player, PlayerState, PlayerTransition, Steering};
pub use shot::Shot;
pub use snapshot::{Drawable, DrawableKind, Snapshot};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FixedStep, TickInput, tick};
