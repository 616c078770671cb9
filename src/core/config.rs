//! Tool configuration.
//!
//! Handles reading and validating the optional `.regcheck.toml` file at the
//! registry root. A registry without one uses the default layout.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Registry configuration stored in `.regcheck.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Layout of the registry
    #[serde(default)]
    pub regcheck: Meta,
}

/// Layout section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Directory containing one subdirectory per server
    #[serde(default = "default_servers_dir")]
    pub servers_dir: PathBuf,
    /// Secrets store file, in dotenv format
    #[serde(default = "default_secrets_file")]
    pub secrets_file: PathBuf,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            servers_dir: default_servers_dir(),
            secrets_file: default_secrets_file(),
        }
    }
}

fn default_servers_dir() -> PathBuf {
    PathBuf::from(constants::SERVERS_DIR)
}

fn default_secrets_file() -> PathBuf {
    PathBuf::from(constants::SECRETS_FILE)
}

impl Config {
    /// Path to the configuration file under `root`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load configuration from `<root>/.regcheck.toml`, falling back to
    /// defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read, and `ConfigError::InvalidValue` if a path
    /// is empty or escapes the registry root.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate that configured paths are usable relative paths.
    pub fn validate(&self) -> Result<()> {
        check_relative("servers_dir", &self.regcheck.servers_dir)?;
        check_relative("secrets_file", &self.regcheck.secrets_file)?;
        Ok(())
    }
}

fn check_relative(field: &'static str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must not be empty".to_string(),
        }
        .into());
    }

    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be relative to the registry root: {}", path.display()),
        }
        .into());
    }

    Ok(())
}
