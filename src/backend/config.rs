//! Window configuration.
//!
//! Settings loaded from an INI file, with safe defaults matching the
//! engine's 640x480 reference resolution.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 480
//! title = telon
//! target_fps = 60
//! vsync = true
//! fullscreen = false
//! ```

use std::path::PathBuf;

use configparser::ini::Ini;
use log::info;

use crate::error::{Error, Result};

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TITLE: &str = "telon";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window settings for the backend.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    pub config_path: PathBuf,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowConfig {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: false,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load settings from the INI file. Missing values keep their current
    /// (default) values.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| Error::Config {
            message: format!("failed to load config file: {e}"),
        })?;

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
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

        info!(
            "Loaded config: {}x{} '{}', fps={}, vsync={}, fullscreen={}",
            self.width, self.height, self.title, self.target_fps, self.vsync, self.fullscreen
        );

        Ok(())
    }

    /// Save settings to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.width.to_string()));
        config.set("window", "height", Some(self.height.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config.write(&self.config_path).map_err(|e| Error::Config {
            message: format!("failed to save config file: {e}"),
        })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_ini(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("telon-{name}-{}.ini", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_reference_resolution() {
        let c = WindowConfig::new();
        assert_eq!(c.window_size(), (640, 480));
        assert_eq!(c.target_fps, 60);
        assert!(c.vsync);
        assert!(!c.fullscreen);
    }

    #[test]
    fn test_load_overrides_and_keeps_missing() {
        let path = scratch_ini(
            "cfg-load",
            "[window]\nwidth = 800\ntitle = demo\nvsync = false\nfullscreen = true\n",
        );
        let mut c = WindowConfig::with_path(&path);
        c.load_from_file().unwrap();
        assert_eq!(c.width, 800);
        assert_eq!(c.height, 480); // untouched default
        assert_eq!(c.title, "demo");
        assert!(!c.vsync);
        assert!(c.fullscreen);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = WindowConfig::with_path("/nonexistent/telon.ini");
        assert!(c.load_from_file().is_err());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = std::env::temp_dir().join(format!("telon-cfg-rt-{}.ini", std::process::id()));
        let mut saved = WindowConfig::with_path(&path);
        saved.width = 1024;
        saved.title = "roundtrip".into();
        saved.save_to_file().unwrap();

        let mut loaded = WindowConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.width, 1024);
        assert_eq!(loaded.title, "roundtrip");
    }
}
