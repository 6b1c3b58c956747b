//! Per-frame keyboard and mouse input resource.
//!
//! Captures the subset of input state the demo cares about and exposes it to
//! systems via the [`InputState`] resource. Defaults use WASD for movement,
//! with the arrow keys as alternates, and Q/E, Z/X for camera rotation and zoom.
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::ffi::KeyboardKey;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with its keyboard bindings.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
    /// Optional second key for the same action.
    pub alt_binding: KeyboardKey,
}

impl BoolState {
    /// Binding with a single key.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }

    /// Binding with a primary and an alternate key.
    pub fn bound_alt(key: KeyboardKey, alt: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            alt_binding: alt,
            ..Self::default()
        }
    }

    /// Update from raw key queries for this frame.
    pub fn update(
        &mut self,
        is_down: impl Fn(KeyboardKey) -> bool,
        is_pressed: impl Fn(KeyboardKey) -> bool,
    ) {
        let alt = self.alt_binding != KeyboardKey::KEY_NULL;
        self.active = is_down(self.key_binding) || (alt && is_down(self.alt_binding));
        self.just_pressed = is_pressed(self.key_binding) || (alt && is_pressed(self.alt_binding));
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
            alt_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame input relevant to the demo.
///
/// Fields are grouped by purpose: movement, camera control, and
/// mode toggles.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    // Camera
    pub rotate_left: BoolState,
    pub rotate_right: BoolState,
    pub zoom_in: BoolState,
    pub zoom_out: BoolState,
    pub camera_reset: BoolState,
    // View padding
    pub padding_decrease: BoolState,
    pub padding_increase: BoolState,
    // Modes
    pub exit: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
    /// Mouse position in window pixels.
    pub mouse_position: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_alt(KeyboardKey::KEY_W, KeyboardKey::KEY_UP),
            direction_down: BoolState::bound_alt(KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound_alt(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound_alt(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
            rotate_left: BoolState::bound(KeyboardKey::KEY_Q),
            rotate_right: BoolState::bound(KeyboardKey::KEY_E),
            zoom_in: BoolState::bound(KeyboardKey::KEY_Z),
            zoom_out: BoolState::bound(KeyboardKey::KEY_X),
            camera_reset: BoolState::bound(KeyboardKey::KEY_R),
            padding_decrease: BoolState::bound(KeyboardKey::KEY_LEFT_BRACKET),
            padding_increase: BoolState::bound(KeyboardKey::KEY_RIGHT_BRACKET),
            exit: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            fullscreen_toggle: BoolState::bound(KeyboardKey::KEY_F10),
            mouse_position: Vec2::ZERO,
        }
    }
}

impl InputState {
    /// Combined movement direction from the four direction keys, not normalized.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.direction_up.active {
            dir.y -= 1.0;
        }
        if self.direction_down.active {
            dir.y += 1.0;
        }
        if self.direction_left.active {
            dir.x -= 1.0;
        }
        if self.direction_right.active {
            dir.x += 1.0;
        }
        dir
    }
}
