//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in world coordinates. The render
//! system draws shapes centered on it and the camera follows it for entities
//! tagged with [`CameraTarget`](crate::components::cameratarget::CameraTarget).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
