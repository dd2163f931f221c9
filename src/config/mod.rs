// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[generation]` - Generation service model and endpoint overrides
//!
//! The API key is deliberately NOT part of the config file; it is read from
//! the `GEMINI_API_KEY` / `GOOGLE_API_KEY` environment variables so that a
//! shared settings file never carries credentials.
//!
//! # Examples
//!
//! ```no_run
//! use iconsmith::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Iconsmith";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub generation: GenerationSection,
}

/// Language and appearance preferences.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Overrides for the generation service endpoint.
///
/// Unset fields fall back to the defaults in [`defaults`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerationSection {
    /// Model identifier, with or without the `models/` prefix.
    pub model: Option<String>,
    /// Base URL of the generation API.
    pub api_base: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("invalid settings file, falling back to defaults: {err}");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralSection {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            generation: GenerationSection {
                model: Some("gemini-2.5-flash-image-preview".to_string()),
                api_base: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, config.general.language);
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.generation.model, config.generation.model);
        assert!(loaded.generation.api_base.is_none());
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn missing_sections_deserialize_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("en-US"));
        assert!(config.generation.model.is_none());
    }
}
