//! Sketch settings
//!
//! Defaults applied when new details are created and the tolerance used to
//! simplify freehand paths. Supports JSON and TOML file formats stored in the
//! platform-specific configuration directory.

use cavesketch_core::Colour;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Name of the application directory inside the platform config directory
const APP_DIR: &str = "cavesketch";
/// File name of the sketch settings
const SETTINGS_FILE: &str = "sketch.toml";

/// Settings consumed by the sketch document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchSettings {
    /// Colour given to new paths, symbols and text
    pub default_colour: Colour,
    /// Size given to new symbols
    pub default_symbol_size: f64,
    /// Size given to new text labels
    pub default_text_size: f64,
    /// Fraction of a path's bounding diagonal used as its simplification tolerance
    pub simplification_factor: f64,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            default_colour: Colour::Black,
            default_symbol_size: 1.0,
            default_text_size: 1.0,
            simplification_factor: 0.005,
        }
    }
}

impl SketchSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the settings file in the user's config directory
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
        Ok(dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!(path = %path.display(), "loaded sketch settings");
        Ok(settings)
    }

    /// Load settings from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.default_symbol_size <= 0.0 || !self.default_symbol_size.is_finite() {
            return Err(SettingsError::invalid(
                "default_symbol_size",
                "must be a positive number",
            ));
        }

        if self.default_text_size <= 0.0 || !self.default_text_size.is_finite() {
            return Err(SettingsError::invalid(
                "default_text_size",
                "must be a positive number",
            ));
        }

        if !(0.0..1.0).contains(&self.simplification_factor) {
            return Err(SettingsError::invalid(
                "simplification_factor",
                "must be in the range [0, 1)",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
