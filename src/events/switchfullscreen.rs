//! Fullscreen toggle event and observer.
//!
//! Pressing **F10** triggers [`SwitchFullScreenEvent`], handled by
//! [`switch_fullscreen_observer`]. The window size changes as a result, and the
//! next frame's [`update_view_state`](crate::systems::viewport::update_view_state)
//! recomputes the letterboxed view for it.

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::ffi;

/// Event triggered to toggle fullscreen mode.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

/// Observer that toggles fullscreen mode when [`SwitchFullScreenEvent`] fires.
///
/// - If [`FullScreen`] exists: removes it and restores the configured window size.
/// - Otherwise: inserts it and resizes the window to the current monitor before
///   entering fullscreen.
///
/// `GameConfig::fullscreen` is updated to the new state.
pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    mut config: ResMut<GameConfig>,
) {
    // Config mirrors the window state.
    let enable = fullscreen.is_none();
    if config.fullscreen != enable {
        config.fullscreen = enable;
    }

    if !enable {
        commands.remove_resource::<FullScreen>();

        if rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
            let (w, h) = config.window_size();
            rl.set_window_size(w as i32, h as i32);
            rl.restore_window();

            if rl.is_window_fullscreen() {
                error!("Failed to leave fullscreen");
            } else {
                info!("Fullscreen disabled, window {}x{}", w, h);
            }
        }
    } else {
        commands.insert_resource(FullScreen {});

        if !rl.is_window_fullscreen() {
            let monitor: i32 = unsafe { ffi::GetCurrentMonitor() };
            let monitor_width = unsafe { ffi::GetMonitorWidth(monitor) };
            let monitor_height = unsafe { ffi::GetMonitorHeight(monitor) };
            info!("Monitor dimensions: {}x{}", monitor_width, monitor_height);
            rl.set_window_size(monitor_width, monitor_height);
            rl.toggle_fullscreen();

            if rl.is_window_fullscreen() {
                info!("Fullscreen enabled");
            } else {
                error!("Failed to enter fullscreen");
            }
        }
    }
}
