//! Demo systems.
//!
//! Submodules overview
//! - [`camera`] – camera rotation/zoom from input and following the target entity
//! - [`gameconfig`] – apply [`GameConfig`](crate::resources::gameconfig::GameConfig) changes
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – move input-controlled entities
//! - [`mousecontroller`] – move entities to the cursor's world position
//! - [`render`] – clear, set the letterboxed viewport and draw the world
//! - [`time`] – update simulation time and delta
//! - [`viewport`] – forward window resizes and padding changes to the scaler

pub mod camera;
pub mod gameconfig;
pub mod input;
pub mod inputsimplecontroller;
pub mod mousecontroller;
pub mod render;
pub mod time;
pub mod viewport;
