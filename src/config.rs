//! Configuration management for the application.
//!
//! Loads application configuration in TOML format with platform-specific
//! directory resolution. The config is read-only at runtime; a missing or
//! corrupt file is never fatal, defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_BINARY_NAME;
use crate::models::palette::DEFAULT_STEPS;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme selection (auto-detect by default)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Picker behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Hex color the picker starts from. `None` uses the built-in default.
    #[serde(default)]
    pub startup_color: Option<String>,
    /// Number of steps in the tint and shade ramps.
    #[serde(default = "default_palette_steps")]
    pub palette_steps: usize,
}

fn default_palette_steps() -> usize {
    DEFAULT_STEPS
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            startup_color: None,
            palette_steps: DEFAULT_STEPS,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Picker behavior
    #[serde(default)]
    pub picker: PickerConfig,
}

impl Config {
    /// Full path of the config file.
    ///
    /// - Linux: `~/.config/huepick/config.toml`
    /// - macOS: `~/Library/Application Support/huepick/config.toml`
    /// - Windows: `%APPDATA%\huepick\config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join(APP_BINARY_NAME).join("config.toml"))
    }

    /// Loads the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.picker.palette_steps, DEFAULT_STEPS);
        assert!(config.picker.startup_color.is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            ui: UiConfig {
                theme_mode: ThemeMode::Dark,
            },
            picker: PickerConfig {
                startup_color: Some("#3B82F6".to_string()),
                palette_steps: 12,
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[ui]\ntheme_mode = \"light\"\n").unwrap();
        assert_eq!(parsed.ui.theme_mode, ThemeMode::Light);
        assert_eq!(parsed.picker.palette_steps, DEFAULT_STEPS);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            ui: UiConfig {
                theme_mode: ThemeMode::Light,
            },
            picker: PickerConfig {
                startup_color: Some("#00C950".to_string()),
                palette_steps: 8,
            },
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let loaded: Config = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }
}
