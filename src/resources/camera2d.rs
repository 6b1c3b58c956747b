//! Shared 2D camera resource.
//!
//! Holds position, rotation, zoom and origin, and derives the world-to-screen
//! transform (and its inverse) from them. The matrices are cached and only
//! rebuilt on the first read after a mutation, so systems can freely query
//! them several times per frame.
//!
//! Position and origin are floored before building the transform so the
//! camera always lands on whole logical pixels.

use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec2, Vec3};
use log::warn;
use thiserror::Error;

/// Errors produced when mapping through the camera transform.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    /// The transform has no inverse, which happens when a zoom component is zero.
    #[error("camera transform is singular (zoom {zoom})")]
    SingularTransform { zoom: Vec2 },
}

/// Cached derived matrices.
#[derive(Clone, Copy, Debug)]
enum CachedMatrices {
    /// Matrices match the current camera parameters.
    /// `inverse` is `None` when `transform` is singular.
    Clean {
        transform: Mat4,
        inverse: Option<Mat4>,
    },
    /// A parameter changed since the last recomputation.
    Dirty,
}

/// ECS resource that holds the active 2D camera.
///
/// Updated by camera-controller systems during the frame, read by the render
/// system when composing the draw transform.
#[derive(Resource, Clone, Debug)]
pub struct Camera2D {
    position: Vec2,
    rotation: f32,
    zoom: Vec2,
    origin: Vec2,
    cache: CachedMatrices,
    recomputations: u64,
}

impl Camera2D {
    /// Create a camera at the world origin with the origin centered on a
    /// `viewport_w` x `viewport_h` viewport. Matrices are computed right away.
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            zoom: Vec2::ONE,
            origin: Vec2::new(viewport_w / 2.0, viewport_h / 2.0),
            cache: CachedMatrices::Dirty,
            recomputations: 0,
        };
        camera.recompute();
        camera
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        if self.position != position {
            self.position = position;
            self.cache = CachedMatrices::Dirty;
        }
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        if self.rotation != rotation {
            self.rotation = rotation;
            self.cache = CachedMatrices::Dirty;
        }
    }

    /// Per-axis zoom.
    pub fn zoom(&self) -> Vec2 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: Vec2) {
        if self.zoom != zoom {
            self.zoom = zoom;
            self.cache = CachedMatrices::Dirty;
        }
    }

    pub fn set_uniform_zoom(&mut self, zoom: f32) {
        self.set_zoom(Vec2::splat(zoom));
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        if self.origin != origin {
            self.origin = origin;
            self.cache = CachedMatrices::Dirty;
        }
    }

    /// Move the camera by `delta` world units.
    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    /// Rotate the camera by `delta` radians.
    pub fn rotate(&mut self, delta: f32) {
        self.set_rotation(self.rotation + delta);
    }

    /// Set the origin to the center of the given viewport size.
    pub fn center_origin(&mut self, viewport_w: f32, viewport_h: f32) {
        self.set_origin(Vec2::new(viewport_w / 2.0, viewport_h / 2.0));
    }

    /// `true` when a parameter changed and the matrices will be rebuilt on the next read.
    pub fn is_dirty(&self) -> bool {
        matches!(self.cache, CachedMatrices::Dirty)
    }

    /// Number of times the matrices have been rebuilt, including the one in [`Camera2D::new`].
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// World-to-screen transform.
    pub fn transform(&mut self) -> Mat4 {
        self.matrices().0
    }

    /// Screen-to-world transform.
    pub fn inverse_transform(&mut self) -> Result<Mat4, CameraError> {
        self.matrices()
            .1
            .ok_or(CameraError::SingularTransform { zoom: self.zoom })
    }

    /// Map a screen-space point into world space.
    pub fn screen_to_world(&mut self, screen: Vec2) -> Result<Vec2, CameraError> {
        let inverse = self.inverse_transform()?;
        Ok(inverse.transform_point3(screen.extend(0.0)).truncate())
    }

    /// Map a world-space point into screen space.
    pub fn world_to_screen(&mut self, world: Vec2) -> Vec2 {
        self.transform()
            .transform_point3(world.extend(0.0))
            .truncate()
    }

    /// Axis-aligned world rectangle `(min, max)` seen through a `width` x `height` screen.
    pub fn visible_world_bounds(
        &mut self,
        width: f32,
        height: f32,
    ) -> Result<(Vec2, Vec2), CameraError> {
        let corners = [
            Vec2::ZERO,
            Vec2::new(width, 0.0),
            Vec2::new(0.0, height),
            Vec2::new(width, height),
        ];
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for corner in corners {
            let p = self.screen_to_world(corner)?;
            min = min.min(p);
            max = max.max(p);
        }
        Ok((min, max))
    }

    fn matrices(&mut self) -> (Mat4, Option<Mat4>) {
        if let CachedMatrices::Clean { transform, inverse } = self.cache {
            return (transform, inverse);
        }
        self.recompute()
    }

    fn recompute(&mut self) -> (Mat4, Option<Mat4>) {
        let transform = Mat4::from_translation(self.origin.floor().extend(0.0))
            * Mat4::from_scale(Vec3::new(self.zoom.x, self.zoom.y, 1.0))
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_translation((-self.position.floor()).extend(0.0));

        let det = transform.determinant();
        let inverse = if det != 0.0 && det.is_finite() {
            Some(transform.inverse())
        } else {
            warn!("Camera transform is singular (zoom {})", self.zoom);
            None
        };

        self.cache = CachedMatrices::Clean { transform, inverse };
        self.recomputations += 1;
        (transform, inverse)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-3;

    fn approx_eq_vec(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    fn camera_at(position: Vec2) -> Camera2D {
        let mut cam = Camera2D::new(0.0, 0.0);
        cam.set_position(position);
        cam
    }

    #[test]
    fn test_new_is_clean_and_centered() {
        let cam = Camera2D::new(640.0, 360.0);
        assert!(!cam.is_dirty());
        assert_eq!(cam.recomputations(), 1);
        assert_eq!(cam.origin(), Vec2::new(320.0, 180.0));
        assert_eq!(cam.zoom(), Vec2::ONE);
    }

    #[test]
    fn test_position_maps_to_screen_origin() {
        let mut cam = camera_at(Vec2::new(100.0, 50.0));
        assert!(approx_eq_vec(
            cam.world_to_screen(Vec2::new(100.0, 50.0)),
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_centered_origin_puts_target_mid_screen() {
        let mut cam = Camera2D::new(640.0, 360.0);
        cam.set_position(Vec2::new(1000.0, -200.0));
        assert!(approx_eq_vec(
            cam.world_to_screen(Vec2::new(1000.0, -200.0)),
            Vec2::new(320.0, 180.0)
        ));
    }

    #[test]
    fn test_position_and_origin_are_floored() {
        let mut cam = Camera2D::new(0.0, 0.0);
        cam.set_position(Vec2::new(10.7, 20.2));
        cam.set_origin(Vec2::new(5.9, 5.1));
        // -floor(pos) + floor(origin) = (-10 + 5, -20 + 5)
        assert!(approx_eq_vec(
            cam.world_to_screen(Vec2::ZERO),
            Vec2::new(-5.0, -15.0)
        ));
    }

    #[test]
    fn test_rotation_then_zoom_order() {
        let mut cam = Camera2D::new(0.0, 0.0);
        cam.set_rotation(FRAC_PI_2);
        cam.set_zoom(Vec2::new(2.0, 3.0));
        // Rotate (1, 0) by 90deg -> (0, 1), then scale -> (0, 3)
        assert!(approx_eq_vec(
            cam.world_to_screen(Vec2::new(1.0, 0.0)),
            Vec2::new(0.0, 3.0)
        ));
    }

    #[test]
    fn test_round_trip_through_inverse() {
        let mut cam = Camera2D::new(640.0, 360.0);
        cam.set_position(Vec2::new(37.0, -12.0));
        cam.set_rotation(0.7);
        cam.set_zoom(Vec2::new(1.5, 0.75));
        for p in [
            Vec2::ZERO,
            Vec2::new(100.0, 50.0),
            Vec2::new(-250.5, 13.25),
            Vec2::new(500.0, -500.0),
        ] {
            let screen = cam.world_to_screen(p);
            let back = cam.screen_to_world(screen).unwrap();
            assert!(approx_eq_vec(back, p), "{p} -> {screen} -> {back}");
        }
    }

    #[test]
    fn test_inverse_matches_transform() {
        let mut cam = Camera2D::new(320.0, 240.0);
        cam.set_rotation(1.2);
        cam.set_zoom(Vec2::new(2.0, 0.5));
        let product = cam.transform() * cam.inverse_transform().unwrap();
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn test_repeated_reads_are_identical_and_cached() {
        let mut cam = Camera2D::new(640.0, 360.0);
        cam.set_rotation(0.3);
        let a = cam.transform();
        let b = cam.transform();
        assert_eq!(a.to_cols_array(), b.to_cols_array());
        assert_eq!(cam.recomputations(), 2);
    }

    #[test]
    fn test_setting_same_value_does_not_dirty() {
        let mut cam = Camera2D::new(640.0, 360.0);
        let before = cam.transform();
        let count = cam.recomputations();

        cam.set_position(cam.position());
        cam.set_rotation(cam.rotation());
        cam.set_zoom(cam.zoom());
        cam.set_origin(cam.origin());
        cam.center_origin(640.0, 360.0);

        assert!(!cam.is_dirty());
        assert_eq!(cam.transform(), before);
        assert_eq!(cam.recomputations(), count);
    }

    #[test]
    fn test_mutation_recomputes_once_on_read() {
        let mut cam = Camera2D::new(640.0, 360.0);
        cam.translate(Vec2::new(5.0, 0.0));
        cam.rotate(0.1);
        assert!(cam.is_dirty());
        assert_eq!(cam.recomputations(), 1);

        let _ = cam.transform();
        let _ = cam.inverse_transform();
        assert!(!cam.is_dirty());
        assert_eq!(cam.recomputations(), 2);
    }

    #[test]
    fn test_zero_zoom_is_singular() {
        let mut cam = Camera2D::new(640.0, 360.0);
        cam.set_zoom(Vec2::new(0.0, 1.0));
        assert_eq!(
            cam.inverse_transform(),
            Err(CameraError::SingularTransform {
                zoom: Vec2::new(0.0, 1.0)
            })
        );
        assert!(cam.screen_to_world(Vec2::ZERO).is_err());
        // The forward transform is still usable
        let _ = cam.world_to_screen(Vec2::ONE);

        cam.set_uniform_zoom(1.0);
        assert!(cam.inverse_transform().is_ok());
    }

    #[test]
    fn test_visible_world_bounds() {
        let mut cam = Camera2D::new(640.0, 360.0);
        cam.set_position(Vec2::new(100.0, 100.0));
        cam.set_uniform_zoom(2.0);
        let (min, max) = cam.visible_world_bounds(640.0, 360.0).unwrap();
        assert!(approx_eq_vec(min, Vec2::new(-60.0, 10.0)));
        assert!(approx_eq_vec(max, Vec2::new(260.0, 190.0)));
    }
}
