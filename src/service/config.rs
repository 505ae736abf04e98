//! Application configuration loading.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::{NameFindError, Result};

/// Default names file, resolved against the working directory.
pub const DEFAULT_NAMES_FILE: &str = "names.txt";

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the names file (defaults to names.txt in the working directory)
    pub names_file: PathBuf,
    /// Font file to use for CJK glyphs instead of the platform candidates
    pub font_path: Option<PathBuf>,
    /// Initial window geometry
    pub window: WindowConfig,
}

/// `[window]` section of the config file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            names_file: PathBuf::from(DEFAULT_NAMES_FILE),
            font_path: None,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 400.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the user config directory or return defaults.
    ///
    /// A missing file is not an error. A malformed file is logged and
    /// replaced by defaults.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded configuration from {:?}", path);
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Read a config file, returning `None` if it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map(Some)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| NameFindError::Config(e.to_string()))
    }
}

/// Project directories for this application, if the platform has them.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "namefind")
}

/// Location of `config.toml` in the user config directory.
pub fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.names_file, PathBuf::from("names.txt"));
        assert!(config.font_path.is_none());
        assert_eq!(config.window.width, 450.0);
        assert_eq!(config.window.height, 400.0);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
names_file = "data/people.txt"

[window]
width = 600.0
"#,
        )
        .unwrap();

        assert_eq!(config.names_file, PathBuf::from("data/people.txt"));
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.window.height, 400.0);
    }

    #[test]
    fn test_font_path() {
        let config = AppConfig::from_toml_str(r#"font_path = "/fonts/cjk.ttc""#).unwrap();
        assert_eq!(config.font_path, Some(PathBuf::from("/fonts/cjk.ttc")));
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml_str("names_file = [");
        assert!(matches!(result, Err(NameFindError::Config(_))));

        let result = AppConfig::from_toml_str("[window]\nwidth = \"wide\"");
        assert!(matches!(result, Err(NameFindError::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir()
            .join("namefind_test_config_missing")
            .join("config.toml");
        assert!(AppConfig::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = std::env::temp_dir().join("namefind_test_config_file");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("config.toml");
        fs::write(&path, "names_file = \"roster.txt\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.names_file, PathBuf::from("roster.txt"));

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
