//! Game configuration change detection systems.
//!
//! Monitor [`GameConfig`] for changes and apply them to the window and to the
//! [`ViewportScaler`]. The logical resolution is fixed at startup; only the
//! padding, frame pacing and fullscreen state follow the config at runtime.

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use crate::resources::viewportscaler::ViewportScaler;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::ffi;

/// Push the configured padding into the scaler when the config changes.
pub fn apply_padding_from_config(config: Res<GameConfig>, mut scaler: ResMut<ViewportScaler>) {
    if !config.is_changed() || scaler.padding() == config.padding {
        return;
    }
    if config.padding < 0.0 || !config.padding.is_finite() {
        warn!("Ignoring invalid padding {}", config.padding);
        return;
    }
    info!("Padding {} -> {}", scaler.padding(), config.padding);
    scaler.set_padding(config.padding);
}

/// Apply window-related settings when [`GameConfig`] is added or modified.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `RaylibHandle` (non-send, mutable) - for window operations
/// - `FullScreen` (optional) - current fullscreen state
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }

    // Synchronize fullscreen state between config and window
    let is_fullscreen = fullscreen.is_some();
    if config.fullscreen != is_fullscreen {
        info!(
            "Fullscreen mismatch: config={}, window={} - triggering toggle",
            config.fullscreen, is_fullscreen
        );
        commands.trigger(SwitchFullScreenEvent {});
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    rl.set_target_fps(config.target_fps);

    info!(
        "GameConfig applied: vsync={}, target_fps={}",
        config.vsync, config.target_fps
    );
}
