//! Viewport scaler resource for fixed-resolution rendering.
//!
//! The game draws at a fixed logical resolution. This resource maps that
//! resolution onto whatever backbuffer size the window currently reports,
//! producing a centered viewport plus a uniform scale factor so the logical
//! aspect ratio is preserved (letterbox/pillarbox bars fill the rest).
//!
//! The host calls [`ViewportScaler::on_physical_size_changed`] whenever the
//! window size changes; everything else is a pure function of the inputs.

use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec2, Vec3};
use log::debug;

/// Fixed internal rendering resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogicalResolution {
    pub width: u32,
    pub height: u32,
}

impl LogicalResolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height of the logical resolution.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Derived view rectangle and scale for the current backbuffer size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Width of the drawable area in physical pixels.
    pub view_width: f32,
    /// Height of the drawable area in physical pixels.
    pub view_height: f32,
    /// Left edge of the viewport in physical pixels.
    pub viewport_x: f32,
    /// Top edge of the viewport in physical pixels.
    pub viewport_y: f32,
    /// Logical-to-physical pixel ratio.
    pub scale_factor: f32,
}

impl ViewState {
    /// Zero-sized view produced for degenerate input. Drawing into it is a no-op.
    pub const EMPTY: ViewState = ViewState {
        view_width: 0.0,
        view_height: 0.0,
        viewport_x: 0.0,
        viewport_y: 0.0,
        scale_factor: 0.0,
    };

    /// Depth range of the viewport.
    pub const DEPTH_RANGE: (f32, f32) = (0.0, 1.0);

    /// Viewport rectangle as `(x, y, width, height)`.
    pub fn viewport(&self) -> (f32, f32, f32, f32) {
        (
            self.viewport_x,
            self.viewport_y,
            self.view_width,
            self.view_height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.view_width <= 0.0 || self.view_height <= 0.0
    }
}

/// Compute the letterboxed view for a logical resolution inside a physical
/// backbuffer, shrunk by `padding` pixels.
///
/// Padding shrinks the width by `2 * padding` and the height by
/// `2 * padding * aspect`, with `aspect` taken from the unpadded view. Zero or
/// negative dimensions, invalid padding, or padding that eats the whole view
/// produce [`ViewState::EMPTY`].
pub fn compute_view(
    logical_w: f32,
    logical_h: f32,
    physical_w: f32,
    physical_h: f32,
    padding: f32,
) -> ViewState {
    let dims_ok = [logical_w, logical_h, physical_w, physical_h]
        .iter()
        .all(|d| d.is_finite() && *d > 0.0);
    if !dims_ok || !padding.is_finite() || padding < 0.0 {
        return ViewState::EMPTY;
    }

    let (mut view_width, mut view_height) = if physical_w / logical_w > physical_h / logical_h {
        // Window is wider than the logical resolution - pillarbox
        (physical_h / logical_h * logical_w, physical_h)
    } else {
        // Window is taller (or equal) - letterbox
        (physical_w, physical_w / logical_w * logical_h)
    };

    let aspect = view_height / view_width;
    view_width -= padding * 2.0;
    view_height -= padding * 2.0 * aspect;

    if view_width <= 0.0 || view_height <= 0.0 {
        return ViewState::EMPTY;
    }

    ViewState {
        view_width,
        view_height,
        viewport_x: physical_w / 2.0 - view_width / 2.0,
        viewport_y: physical_h / 2.0 - view_height / 2.0,
        scale_factor: view_width / logical_w,
    }
}

/// ECS resource holding the logical resolution and the current view.
#[derive(Resource, Clone, Debug)]
pub struct ViewportScaler {
    logical: LogicalResolution,
    padding: f32,
    physical: (i32, i32),
    view: ViewState,
}

impl ViewportScaler {
    /// Create a scaler and compute the view for the initial backbuffer size.
    pub fn new(logical: LogicalResolution, padding: f32, physical_w: i32, physical_h: i32) -> Self {
        let mut scaler = Self {
            logical,
            padding,
            physical: (physical_w, physical_h),
            view: ViewState::EMPTY,
        };
        scaler.recompute();
        scaler
    }

    pub fn logical(&self) -> LogicalResolution {
        self.logical
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Last physical backbuffer size seen, `(width, height)`.
    pub fn physical_size(&self) -> (i32, i32) {
        self.physical
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Resize hook. Returns `true` if the size differed and the view was recomputed.
    pub fn on_physical_size_changed(&mut self, width: i32, height: i32) -> bool {
        if self.physical == (width, height) {
            return false;
        }
        self.physical = (width, height);
        self.recompute();
        true
    }

    /// Change the padding and recompute the view.
    pub fn set_padding(&mut self, padding: f32) {
        if self.padding == padding {
            return;
        }
        self.padding = padding;
        self.recompute();
    }

    /// Uniform scale matrix from logical to physical pixels.
    pub fn scale_matrix(&self) -> Mat4 {
        let s = self.view.scale_factor;
        Mat4::from_scale(Vec3::new(s, s, 1.0))
    }

    /// Map a window-space position into logical space.
    ///
    /// Positions that fall on the bars are clamped to the logical bounds.
    /// Returns `None` while the view is empty (e.g. minimized window).
    pub fn window_to_logical(&self, window_pos: Vec2) -> Option<Vec2> {
        if self.view.is_empty() {
            return None;
        }
        let logical_w = self.logical.width as f32;
        let logical_h = self.logical.height as f32;

        let relative = window_pos - Vec2::new(self.view.viewport_x, self.view.viewport_y);
        let scale = Vec2::new(
            logical_w / self.view.view_width,
            logical_h / self.view.view_height,
        );
        let p = relative * scale;
        Some(Vec2::new(
            p.x.clamp(0.0, logical_w),
            p.y.clamp(0.0, logical_h),
        ))
    }

    fn recompute(&mut self) {
        let (w, h) = self.physical;
        self.view = compute_view(
            self.logical.width as f32,
            self.logical.height as f32,
            w as f32,
            h as f32,
            self.padding,
        );
        debug!(
            "View recomputed for {}x{} (padding {}): {:?}",
            w, h, self.padding, self.view
        );
    }
}
