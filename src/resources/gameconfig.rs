//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//! padding = 0
//!
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//!
//! [camera]
//! speed = 200
//! rotation_speed = 1.5
//! zoom_speed = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_PADDING: f32 = 0.0;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CAMERA_SPEED: f32 = 200.0;
const DEFAULT_CAMERA_ROTATION_SPEED: f32 = 1.5;
const DEFAULT_CAMERA_ZOOM_SPEED: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the logical render resolution, padding, window settings and
/// camera speeds. Changes to this resource are picked up by
/// [`apply_gameconfig_changes`].
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Logical render width in pixels.
    pub render_width: u32,
    /// Logical render height in pixels.
    pub render_height: u32,
    /// Padding in physical pixels around the letterboxed view.
    pub padding: f32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Player/camera movement speed in world units per second.
    pub camera_speed: f32,
    /// Camera rotation speed in radians per second.
    pub camera_rotation_speed: f32,
    /// Camera zoom change per second.
    pub camera_zoom_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            padding: DEFAULT_PADDING,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            camera_speed: DEFAULT_CAMERA_SPEED,
            camera_rotation_speed: DEFAULT_CAMERA_ROTATION_SPEED,
            camera_zoom_speed: DEFAULT_CAMERA_ZOOM_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }
        if let Some(padding) = config.getfloat("render", "padding").ok().flatten() {
            self.padding = padding as f32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [camera] section
        if let Some(speed) = config.getfloat("camera", "speed").ok().flatten() {
            self.camera_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("camera", "rotation_speed").ok().flatten() {
            self.camera_rotation_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("camera", "zoom_speed").ok().flatten() {
            self.camera_zoom_speed = speed as f32;
        }

        info!(
            "Loaded config: {}x{} render (padding {}), {}x{} window, fps={}, vsync={}, fullscreen={}",
            self.render_width,
            self.render_height,
            self.padding,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));
        config.set("render", "padding", Some(self.padding.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [camera] section
        config.set("camera", "speed", Some(self.camera_speed.to_string()));
        config.set(
            "camera",
            "rotation_speed",
            Some(self.camera_rotation_speed.to_string()),
        );
        config.set(
            "camera",
            "zoom_speed",
            Some(self.camera_zoom_speed.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set the logical render resolution.
    pub fn set_render_size(&mut self, width: u32, height: u32) {
        self.render_width = width;
        self.render_height = height;
    }

    /// Get the logical render resolution.
    pub fn render_size(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fixedres2d_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.render_size(), (640, 360));
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.padding, 0.0);
        assert!(config.vsync);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.render_size(), (640, 360));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_config_path("partial");
        std::fs::write(&path, "[render]\nwidth = 320\npadding = 12.5\n[camera]\nspeed = 50\n")
            .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.render_size(), (320, 360));
        assert_eq!(config.padding, 12.5);
        assert_eq!(config.camera_speed, 50.0);
        assert_eq!(config.window_size(), (1280, 720));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("save");
        let mut config = GameConfig::with_path(&path);
        config.set_render_size(256, 224);
        config.padding = 8.0;
        config.fullscreen = true;
        config.camera_rotation_speed = 0.5;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.render_size(), (256, 224));
        assert_eq!(loaded.padding, 8.0);
        assert!(loaded.fullscreen);
        assert_eq!(loaded.camera_rotation_speed, 0.5);

        std::fs::remove_file(&path).ok();
    }
}
