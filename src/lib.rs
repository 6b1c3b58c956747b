//! fixedres2d library.
//!
//! Resolution-independent 2D rendering: the world is drawn at a fixed logical
//! resolution, letterboxed into whatever size the window has, through a 2D
//! camera with position, rotation and per-axis zoom.
//!
//! The core lives in [`resources::viewportscaler`] and [`resources::camera2d`];
//! the rest is the raylib + ECS host that exercises them.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
