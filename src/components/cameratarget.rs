//! Camera follow target.

use bevy_ecs::prelude::Component;

/// Marker for the entity the camera tracks.
///
/// [`camera_follow`](crate::systems::camera::camera_follow) copies this
/// entity's [`MapPosition`](crate::components::mapposition::MapPosition)
/// into the camera position every frame. Only the first match is used.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
