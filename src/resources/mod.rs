//! ECS resources made available to systems.
//!
//! Overview
//! - `camera2d` – 2D camera with lazily rebuilt world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `fullscreen` – presence marks the window as fullscreen
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame keyboard and mouse state
//! - `viewportscaler` – logical resolution and the letterboxed view for the window
//! - `windowsize` – current backbuffer dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod debugmode;
pub mod fullscreen;
pub mod gameconfig;
pub mod input;
pub mod viewportscaler;
pub mod windowsize;
pub mod worldtime;
