//! Configuration schema and loading.
//!
//! Precedence: built-in defaults (lowest), then the config file, then
//! `ROSTER__*` environment variables (highest). Nested keys use `__` in
//! variable names, e.g. `ROSTER__STORAGE__DB_PATH`.

pub mod xdg;

use crate::error::RosterError;
use crate::logging::LoggingConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level roster configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Where the employee collection is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database directory; the platform data dir is used when unset
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured database directory, or the XDG default.
    pub fn resolve_db_path(&self) -> Result<PathBuf, RosterError> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => xdg::default_db_path(),
        }
    }
}

/// First-run seeding behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Write the example records when the store is opened empty
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

fn default_seed_enabled() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the given file (or the XDG default when
    /// absent) with an environment overlay.
    pub fn load(explicit_file: Option<&Path>) -> Result<RosterConfig, ConfigError> {
        let mut builder = Config::builder();
        match explicit_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()));
            }
            None => {
                if let Ok(default_path) = xdg::config_file() {
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }
        let builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Write a default config file to the given path, creating parent
    /// directories as needed.
    pub fn write_default(path: &Path) -> Result<(), RosterError> {
        let content = toml::to_string_pretty(&RosterConfig::default())
            .map_err(|e| RosterError::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RosterError::Config(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            RosterError::Config(format!("Failed to write config {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::default();
        assert!(config.storage.db_path.is_none());
        assert!(config.seed.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_explicit_db_path_wins_over_xdg_default() {
        let config = StorageConfig {
            db_path: Some(PathBuf::from("/tmp/roster-db")),
        };
        assert_eq!(
            config.resolve_db_path().unwrap(),
            PathBuf::from("/tmp/roster-db")
        );
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndb_path = \"/tmp/roster-test\"\n\n[seed]\nenabled = false\n",
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(
            config.storage.db_path,
            Some(PathBuf::from("/tmp/roster-test"))
        );
        assert!(!config.seed.enabled);
        // Sections absent from the file keep their defaults.
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(ConfigLoader::load(Some(&path)).is_err());
    }

    #[test]
    fn test_write_default_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ConfigLoader::write_default(&path).unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert!(config.seed.enabled);
        assert_eq!(config.logging.output, "file");
    }
}
