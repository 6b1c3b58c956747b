//! View state systems.
//!
//! [`update_view_state`] is the resize hook: when the [`WindowSize`] resource
//! changes, the [`ViewportScaler`] recomputes the letterboxed view.
//! [`adjust_padding`] lets the `[`/`]` keys change the padding at runtime.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::viewportscaler::ViewportScaler;
use crate::resources::windowsize::WindowSize;

/// Padding change per key press, in physical pixels.
pub const PADDING_STEP: f32 = 8.0;

/// Forward window size changes to the viewport scaler.
pub fn update_view_state(window: Res<WindowSize>, mut scaler: ResMut<ViewportScaler>) {
    if !window.is_changed() {
        return;
    }
    if scaler.physical_size() == (window.w, window.h) {
        return;
    }
    if scaler.on_physical_size_changed(window.w, window.h) {
        let view = scaler.view();
        if view.is_empty() {
            info!("Window {}x{}: view is empty, drawing suspended", window.w, window.h);
        } else {
            info!(
                "Window {}x{}: viewport ({:.1}, {:.1}, {:.1}, {:.1}) scale {:.3}",
                window.w,
                window.h,
                view.viewport_x,
                view.viewport_y,
                view.view_width,
                view.view_height,
                view.scale_factor
            );
        }
    }
}

/// Grow/shrink the padding from input. Writes the new value into
/// [`GameConfig`] so [`apply_padding_from_config`] picks it up.
///
/// [`apply_padding_from_config`]: crate::systems::gameconfig::apply_padding_from_config
pub fn adjust_padding(input: Res<InputState>, mut config: ResMut<GameConfig>) {
    let mut padding = config.padding;
    if input.padding_increase.just_pressed {
        padding += PADDING_STEP;
    }
    if input.padding_decrease.just_pressed {
        padding -= PADDING_STEP;
    }
    let padding = padding.max(0.0);
    if padding != config.padding {
        config.padding = padding;
    }
}
