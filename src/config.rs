use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming a JSON config file to load at startup
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

pub const APP_NAME: &str = "Sticker Sketchpad";

/// Settings for the sketchpad widget and its host window.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Window title and heading above the canvas
    pub title: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Font size used for placed stickers and the sticker preview
    pub sticker_font_size: f32,
    /// Glyph drawn on top of the pen cursor disc
    pub cursor_marker: String,
    pub cursor_font_thin: f32,
    pub cursor_font_thick: f32,
    /// Alpha of the pen cursor disc (0 = invisible, 255 = opaque)
    pub cursor_alpha: u8,
    /// Stickers available before the user adds custom ones
    pub stickers: Vec<String>,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_owned(),
            canvas_width: 256.0,
            canvas_height: 256.0,
            sticker_font_size: 32.0,
            cursor_marker: "*".to_owned(),
            cursor_font_thin: 16.0,
            cursor_font_thick: 32.0,
            cursor_alpha: 96,
            stickers: vec!["🌟".to_owned(), "🎃".to_owned(), "🍕".to_owned()],
        }
    }
}

impl SketchpadConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file from disk
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, falling back to defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let sizes = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("sticker_font_size", self.sticker_font_size),
            ("cursor_font_thin", self.cursor_font_thin),
            ("cursor_font_thick", self.cursor_font_thick),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.stickers.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(
                "stickers must not contain empty glyphs".to_owned(),
            ));
        }

        Ok(())
    }
}
