//! Simple input-to-position controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! moves entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Diagonal movement is normalized to keep a constant speed.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Move each controlled entity's `MapPosition` according to the direction keys.
pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut MapPosition)>,
    input_state: Res<InputState>,
    time: Res<WorldTime>,
) {
    let direction = input_state.direction().normalize_or_zero();
    if direction == glam::Vec2::ZERO {
        return;
    }
    for (controlled, mut position) in query.iter_mut() {
        position.pos += direction * controlled.speed * time.delta;
    }
}
