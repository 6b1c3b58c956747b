//! ECS components for entities.
//!
//! Submodules overview:
//! - [`cameratarget`] – marks the entity the camera follows
//! - [`inputcontrolled`] – keyboard and mouse driven movement
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`shape`] – solid or outlined rectangle to draw
//! - [`tint`] – draw color
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod cameratarget;
pub mod inputcontrolled;
pub mod mapposition;
pub mod shape;
pub mod tint;
pub mod zindex;
