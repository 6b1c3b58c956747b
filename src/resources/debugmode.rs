//! Debug overlay toggle resource.
//!
//! The mere presence of this resource enables the debug overlay: viewport
//! and camera readouts plus the mouse position in window, logical and world
//! space. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
