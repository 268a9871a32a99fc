//! Configuration module for frameseq
//!
//! Holds CLI defaults. The library itself reads no configuration; the
//! command layer decides how to apply these values.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::FrameseqError;

/// Keys accepted by `frameseq config get|set`
pub const KEYS: [&str; 3] = ["quiet", "create_missing_dirs", "confirm_delete"];

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FrameseqConfig {
    /// Suppress per-member progress output by default
    #[serde(default)]
    pub quiet: bool,

    /// Create a missing destination directory before `mv`/`cp`
    #[serde(default)]
    pub create_missing_dirs: bool,

    /// Ask before `rm` unless `-y` is given
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for FrameseqConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            create_missing_dirs: false,
            confirm_delete: true,
        }
    }
}

impl FrameseqConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("frameseq").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there first if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a setting by key
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown key.
    pub fn get(&self, key: &str) -> Result<bool, FrameseqError> {
        match key {
            "quiet" => Ok(self.quiet),
            "create_missing_dirs" => Ok(self.create_missing_dirs),
            "confirm_delete" => Ok(self.confirm_delete),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a setting from its string form; does not save
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown key or a value that is not `true`/`false`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, FrameseqError> {
        let slot = match key {
            "quiet" => &mut self.quiet,
            "create_missing_dirs" => &mut self.create_missing_dirs,
            "confirm_delete" => &mut self.confirm_delete,
            _ => return Err(unknown_key(key)),
        };
        let new_value = value.trim().parse::<bool>().map_err(|_| {
            FrameseqError::InvalidInput(format!(
                "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
            ))
        })?;
        *slot = new_value;
        Ok(new_value)
    }
}

fn unknown_key(key: &str) -> FrameseqError {
    FrameseqError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FrameseqConfig::default();
        assert!(!config.quiet);
        assert!(!config.create_missing_dirs);
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_load_creates_default_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let config = FrameseqConfig::load_from(&path).unwrap();
        assert_eq!(config, FrameseqConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        let mut config = FrameseqConfig::default();
        config.set("create_missing_dirs", "true").unwrap();
        config.set("confirm_delete", "false").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = FrameseqConfig::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
        assert!(reloaded.create_missing_dirs);
        assert!(!reloaded.confirm_delete);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = FrameseqConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = FrameseqConfig::default();
        assert_eq!(config.set("quiet", " true ").unwrap(), true);
        assert!(config.get("quiet").unwrap());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = FrameseqConfig::default();
        assert!(matches!(config.get("colour"), Err(FrameseqError::InvalidInput(_))));
        assert!(matches!(config.set("colour", "true"), Err(FrameseqError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let mut config = FrameseqConfig::default();
        let err = config.set("quiet", "yes").unwrap_err();
        assert!(err.to_string().contains("'yes'"));
        assert!(!config.quiet);
    }
}
