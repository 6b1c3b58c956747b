//! Solid rectangle component.
//!
//! Stand-in for sprites: the demo has no asset pipeline, so every visible
//! entity is a colored rectangle centered on its
//! [`MapPosition`](crate::components::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangle drawn in world space.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub width: f32,
    pub height: f32,
    /// Draw only the outline instead of a filled rectangle.
    pub outline: bool,
}

impl Shape {
    pub fn filled(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            outline: false,
        }
    }

    pub fn outlined(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            outline: true,
        }
    }

    /// World-space AABB `(min, max)` when centered on `pos`.
    pub fn aabb(&self, pos: Vec2) -> (Vec2, Vec2) {
        let half = Vec2::new(self.width, self.height) / 2.0;
        (pos - half, pos + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_centered_on_position() {
        let s = Shape::filled(10.0, 4.0);
        let (min, max) = s.aabb(Vec2::new(100.0, 50.0));
        assert_eq!(min, Vec2::new(95.0, 48.0));
        assert_eq!(max, Vec2::new(105.0, 52.0));
    }

    #[test]
    fn test_outlined_flag() {
        assert!(Shape::outlined(1.0, 1.0).outline);
        assert!(!Shape::filled(1.0, 1.0).outline);
    }
}
