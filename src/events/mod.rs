//! Event types and observers.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`switchfullscreen`] – toggle fullscreen; the view follows the new window size
pub mod switchdebug;
pub mod switchfullscreen;
