//! Camera systems.
//!
//! - [`camera_controller`] applies rotation/zoom/reset input to the camera.
//! - [`camera_follow`] keeps the camera on the entity tagged with
//!   [`CameraTarget`].
//!
//! Both only call the camera setters; the transform itself is rebuilt lazily
//! by the first reader in the frame (usually the render system).
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2D;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Zoom limits reachable through the controller.
pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 8.0;

/// Rotate and zoom the camera from input. `R` restores rotation 0 and zoom 1.
pub fn camera_controller(
    mut camera: ResMut<Camera2D>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    if input.camera_reset.just_pressed {
        camera.set_rotation(0.0);
        camera.set_uniform_zoom(1.0);
        return;
    }

    let mut spin = 0.0;
    if input.rotate_left.active {
        spin -= 1.0;
    }
    if input.rotate_right.active {
        spin += 1.0;
    }
    if spin != 0.0 {
        camera.rotate(spin * config.camera_rotation_speed * time.delta);
    }

    let mut zoom_dir = 0.0;
    if input.zoom_in.active {
        zoom_dir += 1.0;
    }
    if input.zoom_out.active {
        zoom_dir -= 1.0;
    }
    if zoom_dir != 0.0 {
        let factor = 1.0 + zoom_dir * config.camera_zoom_speed * time.delta;
        let zoom = (camera.zoom() * factor).clamp(Vec2::splat(MIN_ZOOM), Vec2::splat(MAX_ZOOM));
        camera.set_zoom(zoom);
    }
}

/// Copy the target entity's position into the camera.
pub fn camera_follow(
    mut camera: ResMut<Camera2D>,
    target: Query<&MapPosition, With<CameraTarget>>,
) {
    if let Some(position) = target.iter().next() {
        // Only touch the resource when the target moved.
        if camera.position() != position.pos {
            camera.set_position(position.pos);
        }
    }
}
