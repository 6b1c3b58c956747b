use bevy_ecs::prelude::*;
use log::debug;

use crate::components::inputcontrolled::MouseControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2D;
use crate::resources::input::InputState;
use crate::resources::viewportscaler::ViewportScaler;

/// Move mouse-controlled entities to the cursor's world position.
///
/// The cursor goes window -> logical (undoing the letterbox) -> world
/// (undoing the camera). Nothing moves while the view is empty or the
/// camera transform is singular.
pub fn mouse_controller(
    mut query: Query<(&MouseControlled, &mut MapPosition)>,
    input: Res<InputState>,
    scaler: Res<ViewportScaler>,
    mut camera: ResMut<Camera2D>,
) {
    let Some(logical) = scaler.window_to_logical(input.mouse_position) else {
        return;
    };
    let world_position = match camera.screen_to_world(logical) {
        Ok(p) => p,
        Err(e) => {
            debug!("Mouse not mapped to world: {}", e);
            return;
        }
    };
    for (mouse_controlled, mut map_position) in query.iter_mut() {
        if mouse_controlled.follow_x {
            map_position.pos.x = world_position.x;
        }
        if mouse_controlled.follow_y {
            map_position.pos.y = world_position.y;
        }
    }
}
