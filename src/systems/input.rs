//! Input systems.
//!
//! [`update_input_state`] reads keyboard and mouse state from raylib each
//! frame and writes it into [`InputState`]. Mode toggles are emitted as
//! events ([`SwitchDebugEvent`], [`SwitchFullScreenEvent`]).
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::input::InputState;

/// Poll raylib for keyboard/mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    let input = &mut *input;
    for state in [
        &mut input.direction_up,
        &mut input.direction_down,
        &mut input.direction_left,
        &mut input.direction_right,
        &mut input.rotate_left,
        &mut input.rotate_right,
        &mut input.zoom_in,
        &mut input.zoom_out,
        &mut input.camera_reset,
        &mut input.padding_decrease,
        &mut input.padding_increase,
        &mut input.exit,
        &mut input.mode_debug,
        &mut input.fullscreen_toggle,
    ] {
        state.update(is_key_down, is_key_pressed);
    }

    let mouse = rl.get_mouse_position();
    input.mouse_position = Vec2::new(mouse.x, mouse.y);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }
}
