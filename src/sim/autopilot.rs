//! Attract-mode pilot
//!
//! Produces input the same way a player would: turn toward the nearest live
//! asteroid, shoot when lined up, back off when something gets too close.

use super::body::Circular;
use super::state::GameState;
use super::tick::TickInput;
use crate::{forward_vector, heading_of, normalize_degrees};

/// Heading error (degrees) within which the pilot opens fire
const AIM_TOLERANCE: f32 = 8.0;
/// Heading error below which the pilot stops turning
const TURN_DEADZONE: f32 = 2.0;
/// Extra clearance beyond touching distance that triggers a retreat
const DANGER_MARGIN: f32 = 60.0;

pub fn input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = &state.player;
    if player.is_exploding() {
        return input;
    }

    let Some(target) = state.active_asteroids().min_by(|a, b| {
        let da = a.pos().distance_squared(player.pos());
        let db = b.pos().distance_squared(player.pos());
        da.total_cmp(&db)
    }) else {
        return input;
    };

    let to_target = target.pos() - player.pos();
    let error = normalize_degrees(heading_of(to_target) - player.heading);

    if error.abs() > TURN_DEADZONE {
        // Positive turn increases heading
        input.rotate_right = error > 0.0;
        input.rotate_left = error < 0.0;
    }
    input.fire = error.abs() <= AIM_TOLERANCE;

    let clearance = to_target.length() - target.radius() - player.radius();
    if clearance < DANGER_MARGIN {
        let facing = forward_vector(player.heading).dot(to_target) > 0.0;
        input.thrust_backward = facing;
        input.thrust_forward = !facing;
    }

    input
}
