//! Configuration types and loading for the todo CLI.
//!
//! The main entry point is [`TodoConfig`], which represents the contents of
//! `.todo/config.yaml`. Configuration is loaded with [`load_config`]; the CLI
//! never writes it back.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Color mode
// ---------------------------------------------------------------------------

/// When to color rendered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the terminal supports it (default).
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ConfigError::InvalidValue {
                key: "color".to_string(),
                reason: format!("expected auto, always or never (got {other})"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The CLI configuration, corresponding to `.todo/config.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// will be deserialized correctly with sensible default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Title used for list documents that do not name one.
    #[serde(default = "default_title", rename = "default-title")]
    pub default_title: String,

    /// Output JSON instead of the rendered list.
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub color: ColorMode,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            json: false,
            color: ColorMode::default(),
        }
    }
}

fn default_title() -> String {
    "Todos".to_string()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.todo/` directory.
///
/// If the file does not exist or is empty, a default [`TodoConfig`] is
/// returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(todo_dir: &Path) -> Result<TodoConfig> {
    let config_path = todo_dir.join("config.yaml");

    if !config_path.exists() {
        return Ok(TodoConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    if content.trim().is_empty() {
        return Ok(TodoConfig::default());
    }

    let config: TodoConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let cfg = TodoConfig::default();
        assert_eq!(cfg.default_title, "Todos");
        assert!(!cfg.json);
        assert_eq!(cfg.color, ColorMode::Auto);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = PathBuf::from("/nonexistent/path/.todo");
        let cfg = load_config(&dir).unwrap();
        assert_eq!(cfg, TodoConfig::default());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "\n").unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), TodoConfig::default());
    }

    #[test]
    fn test_load_partial_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "default-title: Chores\ncolor: never\n",
        )
        .unwrap();

        let cfg = load_config(dir.path()).unwrap();
        assert_eq!(cfg.default_title, "Chores");
        assert_eq!(cfg.color, ColorMode::Never);
        assert!(!cfg.json);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "color: sometimes\n").unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert!(matches!(
            "rainbow".parse::<ColorMode>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
