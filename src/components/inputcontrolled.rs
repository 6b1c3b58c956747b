//! Input-controlled movement components.
//!
//! - [`InputControlled`] – keyboard-driven directional movement
//! - [`MouseControlled`] – follows the mouse cursor in world space
//!
//! Systems in [`crate::systems::inputsimplecontroller`] and
//! [`crate::systems::mousecontroller`] read these components to update
//! entity positions.

use bevy_ecs::prelude::Component;

/// Movement driven by the direction keys.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Movement speed in world units per second.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Movement controlled by mouse position.
///
/// The mouse position is mapped from window space through the letterboxed
/// view and the camera inverse into world space.
#[derive(Component, Clone, Copy, Debug)]
pub struct MouseControlled {
    /// Follow mouse X axis.
    pub follow_x: bool,
    /// Follow mouse Y axis.
    pub follow_y: bool,
}

impl MouseControlled {
    /// Create a new MouseControlled component.
    pub fn new(follow_x: bool, follow_y: bool) -> Self {
        Self { follow_x, follow_y }
    }
}
