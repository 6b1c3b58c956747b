//! Render system.
//!
//! Each frame the whole window is cleared to black (the bars), then the
//! letterboxed viewport from [`ViewportScaler`] is set and the world is drawn
//! through `scale_matrix * camera.transform()`. Drawing happens in logical
//! pixels; only the viewport and the scale matrix know about the window size.
//!
//! raylib's 2D camera mode cannot express per-axis zoom, so the viewport,
//! projection and modelview are loaded through rlgl directly.

use bevy_ecs::prelude::*;
use glam::{Mat4, Vec2};
use raylib::ffi;
use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Vector2};

use crate::components::mapposition::MapPosition;
use crate::components::shape::Shape;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2D;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::viewportscaler::{ViewState, ViewportScaler};
use crate::resources::windowsize::WindowSize;

/// Fill for the logical frame, so the bars stay visible around it.
const BACKGROUND: Color = Color {
    r: 24,
    g: 26,
    b: 33,
    a: 255,
};

/// A shape resolved to world-space geometry and a color.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    pub min: Vec2,
    pub size: Vec2,
    pub tint: Tint,
    pub outline: bool,
    pub z: ZIndex,
}

/// Resolve shapes to draw items, dropping those outside `bounds` and sorting
/// by z-index (stable, so equal z keeps query order).
///
/// `bounds` is the world-space `(min, max)` visible through the camera; `None`
/// disables culling.
pub fn collect_visible<'a>(
    shapes: impl Iterator<Item = (&'a Shape, &'a MapPosition, Option<&'a Tint>, Option<&'a ZIndex>)>,
    bounds: Option<(Vec2, Vec2)>,
) -> Vec<DrawItem> {
    let mut items: Vec<DrawItem> = shapes
        .filter_map(|(shape, pos, tint, z)| {
            let (min, max) = shape.aabb(pos.pos);
            if let Some((view_min, view_max)) = bounds {
                let overlap = !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y);
                if !overlap {
                    return None;
                }
            }
            Some(DrawItem {
                min,
                size: max - min,
                tint: tint.copied().unwrap_or_default(),
                outline: shape.outline,
                z: z.copied().unwrap_or_default(),
            })
        })
        .collect();
    items.sort_by_key(|item| item.z);
    items
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut camera: ResMut<Camera2D>,
    scaler: Res<ViewportScaler>,
    window: Res<WindowSize>,
    input: Res<InputState>,
    debug: Option<Res<DebugMode>>,
    shapes: Query<(&Shape, &MapPosition, Option<&Tint>, Option<&ZIndex>)>,
) {
    // Reading the matrices may rebuild the camera cache; that is not a change.
    let camera = camera.bypass_change_detection();
    let view = scaler.view();
    let logical = scaler.logical();
    let (logical_w, logical_h) = (logical.width as f32, logical.height as f32);

    let scale = scaler.scale_matrix();
    let world_matrix = scale * camera.transform();
    let bounds = camera.visible_world_bounds(logical_w, logical_h).ok();
    let items = collect_visible(shapes.iter(), bounds);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    if !view.is_empty() {
        begin_view(&view, window.h);

        load_modelview(&scale);
        d.draw_rectangle_v(
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 {
                x: logical_w,
                y: logical_h,
            },
            BACKGROUND,
        );

        load_modelview(&world_matrix);
        for item in &items {
            draw_item(&mut d, item);
        }

        end_view(window.w, window.h);
    }

    if debug.is_some() {
        draw_debug_overlay(&mut d, camera, &scaler, &window, &input, items.len());
    }
}

/// Restrict drawing to the viewport and set a top-left origin projection over it.
fn begin_view(view: &ViewState, screen_h: i32) {
    let (x, y, w, h) = view.viewport();
    let (near, far) = ViewState::DEPTH_RANGE;
    unsafe {
        ffi::rlDrawRenderBatchActive();
        // OpenGL viewports are bottom-left based
        ffi::rlViewport(
            x.round() as i32,
            screen_h - (y + h).round() as i32,
            w.round() as i32,
            h.round() as i32,
        );
        ffi::rlMatrixMode(ffi::RL_PROJECTION as i32);
        ffi::rlLoadIdentity();
        ffi::rlOrtho(0.0, w as f64, h as f64, 0.0, near as f64, far as f64);
        ffi::rlMatrixMode(ffi::RL_MODELVIEW as i32);
        ffi::rlLoadIdentity();
    }
}

/// Flush pending geometry and replace the modelview matrix.
fn load_modelview(m: &Mat4) {
    let cols = m.to_cols_array();
    unsafe {
        ffi::rlDrawRenderBatchActive();
        ffi::rlLoadIdentity();
        ffi::rlMultMatrixf(cols.as_ptr());
    }
}

/// Back to the full-window state raylib's `BeginDrawing` sets up.
fn end_view(screen_w: i32, screen_h: i32) {
    unsafe {
        ffi::rlDrawRenderBatchActive();
        ffi::rlViewport(0, 0, screen_w, screen_h);
        ffi::rlMatrixMode(ffi::RL_PROJECTION as i32);
        ffi::rlLoadIdentity();
        ffi::rlOrtho(0.0, screen_w as f64, screen_h as f64, 0.0, 0.0, 1.0);
        ffi::rlMatrixMode(ffi::RL_MODELVIEW as i32);
        ffi::rlLoadIdentity();
    }
}

fn draw_item(d: &mut RaylibDrawHandle, item: &DrawItem) {
    let rect = Rectangle {
        x: item.min.x,
        y: item.min.y,
        width: item.size.x,
        height: item.size.y,
    };
    if item.outline {
        d.draw_rectangle_lines_ex(rect, 1.0, item.tint.color);
    } else {
        d.draw_rectangle_rec(rect, item.tint.color);
        d.draw_rectangle_lines_ex(rect, 1.0, item.tint.shaded(0.6));
    }
}

fn draw_debug_overlay(
    d: &mut RaylibDrawHandle,
    camera: &mut Camera2D,
    scaler: &ViewportScaler,
    window: &WindowSize,
    input: &InputState,
    drawn: usize,
) {
    let view = scaler.view();
    let logical = scaler.logical();
    let fps = d.get_fps();

    let mouse = input.mouse_position;
    let mouse_logical = scaler.window_to_logical(mouse);
    let mouse_world = mouse_logical.map(|p| camera.screen_to_world(p));
    let mouse_text = match (mouse_logical, mouse_world) {
        (Some(l), Some(Ok(w))) => format!(
            "Mouse window ({:.0}, {:.0}) logical ({:.1}, {:.1}) world ({:.1}, {:.1})",
            mouse.x, mouse.y, l.x, l.y, w.x, w.y
        ),
        (Some(l), Some(Err(e))) => format!(
            "Mouse window ({:.0}, {:.0}) logical ({:.1}, {:.1}) world: {}",
            mouse.x, mouse.y, l.x, l.y, e
        ),
        _ => format!("Mouse window ({:.0}, {:.0}) outside view", mouse.x, mouse.y),
    };

    let lines = [
        format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        format!(
            "Window {}x{} | Logical {}x{} | Padding {:.1}",
            window.w,
            window.h,
            logical.width,
            logical.height,
            scaler.padding()
        ),
        format!(
            "Viewport ({:.1}, {:.1}, {:.1}, {:.1}) scale {:.3}",
            view.viewport_x, view.viewport_y, view.view_width, view.view_height, view.scale_factor
        ),
        format!(
            "Camera pos ({:.1}, {:.1}) rot {:.2} zoom ({:.2}, {:.2}) rebuilds {}",
            camera.position().x,
            camera.position().y,
            camera.rotation(),
            camera.zoom().x,
            camera.zoom().y,
            camera.recomputations()
        ),
        mouse_text,
        format!("Shapes drawn: {}", drawn),
    ];

    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, 10 + i as i32 * 14, 10, Color::YELLOW);
    }
}
