//! Fullscreen marker resource.
//!
//! Present while the window is fullscreen. The
//! [`switch_fullscreen_observer`](crate::events::switchfullscreen::switch_fullscreen_observer)
//! inserts and removes it when toggling.
use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the window is in fullscreen mode.
#[derive(Resource, Clone, Copy)]
pub struct FullScreen {}
