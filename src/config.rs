//! Configuration management for the university portal
//!
//! Built-in defaults, overridden by an optional `uniportal.toml` (or an
//! explicit file), overridden in turn by `UNIPORTAL_*` environment variables
//! (`UNIPORTAL_STORAGE__DATA_DIR=/tmp/portal`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file base name, looked up in the working directory
const DEFAULT_CONFIG_NAME: &str = "uniportal";

/// Complete portal configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PortalConfig {
    pub storage: StorageConfig,
    pub policy: PolicyConfig,
    pub console: ConsoleConfig,
}

/// Where the directory and session live
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Directory holding one JSON file per key (file backend only)
    pub data_dir: String,

    /// Key holding the serialized user directory
    pub users_key: String,

    /// Key holding the serialized session user
    pub session_key: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

/// Registration rules
#[derive(Debug, Deserialize, Clone)]
pub struct PolicyConfig {
    pub min_password_length: usize,
}

/// Line console limits
#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub max_command_length: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: "./portal_data".to_string(),
                users_key: "universityUsers".to_string(),
                session_key: "currentUser".to_string(),
            },
            policy: PolicyConfig {
                min_password_length: 8,
            },
            console: ConsoleConfig {
                max_command_length: 1024,
            },
        }
    }
}

impl PortalConfig {
    /// Load configuration from `uniportal.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(DEFAULT_CONFIG_NAME).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::build(File::from(path.as_ref().to_path_buf()).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("storage.backend", "file")?
            .set_default("storage.data_dir", defaults.storage.data_dir)?
            .set_default("storage.users_key", defaults.storage.users_key)?
            .set_default("storage.session_key", defaults.storage.session_key)?
            .set_default(
                "policy.min_password_length",
                defaults.policy.min_password_length as i64,
            )?
            .set_default(
                "console.max_command_length",
                defaults.console.max_command_length as i64,
            )?
            .add_source(file)
            .add_source(
                Environment::with_prefix("UNIPORTAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: PortalConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.users_key.is_empty() || self.storage.session_key.is_empty() {
            return Err(ConfigError::Message("storage keys cannot be empty".into()));
        }

        if self.storage.users_key == self.storage.session_key {
            return Err(ConfigError::Message(
                "users_key and session_key must differ".into(),
            ));
        }

        if self.storage.backend == StorageBackend::File && self.storage.data_dir.is_empty() {
            return Err(ConfigError::Message("data_dir cannot be empty".into()));
        }

        if self.policy.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.console.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl StorageConfig {
    /// Get the data directory as PathBuf
    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
