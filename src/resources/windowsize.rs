//! Window size resource.
//!
//! Tracks the actual backbuffer dimensions in pixels, which may differ from
//! the game's logical render resolution. Updated each frame by the main loop
//! to handle window resizing; [`update_view_state`] forwards changes to the
//! [`ViewportScaler`](crate::resources::viewportscaler::ViewportScaler).
//!
//! [`update_view_state`]: crate::systems::viewport::update_view_state

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
///
/// This represents the actual OS window dimensions, not the game's logical
/// render resolution. A minimized window may report zero.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
