//! Fill color component for shapes.
//!
//! The [`Tint`] component sets the color a [`Shape`](crate::components::shape::Shape)
//! is drawn with. Filled shapes get a darker border derived with
//! [`Tint::shaded`] so neighbouring tiles stay distinguishable when scaled up.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Draw color for a shape. Shapes without a tint are drawn white.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: Color::new(r, g, b, 255),
        }
    }

    /// Color with RGB scaled by `factor` (clamped to `0..=1`), alpha untouched.
    pub fn shaded(&self, factor: f32) -> Color {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * f).round() as u8;
        Color::new(
            scale(self.color.r),
            scale(self.color.g),
            scale(self.color.b),
            self.color.a,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
