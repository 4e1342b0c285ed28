// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and handedness
//! - `[viewer]` - Page rasterization settings
//! - `[export]` - Where captured and annotated images are written
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.left_handed = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Mirror the handed controls (tray button, crop thumbs) for left-handed use.
    #[serde(default = "default_left_handed", skip_serializing_if = "Option::is_none")]
    pub left_handed: Option<bool>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            left_handed: default_left_handed(),
        }
    }
}

/// Page viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Scale applied to PDF points when rasterizing pages.
    #[serde(
        default = "default_render_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_scale: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            render_scale: default_render_scale(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Directory receiving exported JPEG files. Defaults to the pictures folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Rasterization scale clamped to the supported range. A missing or
    /// non-finite value falls back to the default.
    #[must_use]
    pub fn render_scale(&self) -> f32 {
        self.viewer
            .render_scale
            .filter(|scale| scale.is_finite())
            .unwrap_or(DEFAULT_RENDER_SCALE)
            .clamp(MIN_RENDER_SCALE, MAX_RENDER_SCALE)
    }

    #[must_use]
    pub fn left_handed(&self) -> bool {
        self.general.left_handed.unwrap_or(false)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_left_handed() -> Option<bool> {
    Some(false)
}

fn default_render_scale() -> Option<f32> {
    Some(DEFAULT_RENDER_SCALE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
                left_handed: Some(true),
            },
            viewer: ViewerConfig {
                render_scale: Some(2.0),
            },
            export: ExportConfig {
                directory: Some(PathBuf::from("/tmp/exports")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nleft_handed = true\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert!(loaded.left_handed());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.viewer.render_scale, Some(DEFAULT_RENDER_SCALE));
        assert!(loaded.export.directory.is_none());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn render_scale_is_clamped() {
        let mut config = Config::default();
        config.viewer.render_scale = Some(40.0);
        assert_eq!(config.render_scale(), MAX_RENDER_SCALE);
        config.viewer.render_scale = Some(0.01);
        assert_eq!(config.render_scale(), MIN_RENDER_SCALE);
        config.viewer.render_scale = None;
        assert_eq!(config.render_scale(), DEFAULT_RENDER_SCALE);
    }

    #[test]
    fn non_finite_render_scale_uses_default() {
        let loaded: Config = toml::from_str("[viewer]\nrender_scale = nan\n").expect("parse");
        assert_eq!(loaded.render_scale(), DEFAULT_RENDER_SCALE);

        let mut config = Config::default();
        config.viewer.render_scale = Some(f32::INFINITY);
        assert_eq!(config.render_scale(), DEFAULT_RENDER_SCALE);
    }

    #[test]
    fn default_config_is_right_handed() {
        assert!(!Config::default().left_handed());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("fr".to_string()));
    }

    #[test]
    fn load_with_override_warns_on_corrupted_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
        assert_eq!(loaded, Config::default());
    }
}
