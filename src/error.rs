//! Error types for regcheck.
//!
//! Errors are grouped by the layer that produces them: tool configuration,
//! registry access, and the validation checks themselves.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} check(s) failed")]
    ChecksFailed(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reading `.regcheck.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors locating or reading registry files.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("registry root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("servers directory not found: {}", .0.display())]
    ServersDirNotFound(PathBuf),

    #[error("server not found: {0}")]
    ServerNotFound(String),

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A failed validation check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid server name '{0}': use lowercase letters, digits and single hyphens")]
    InvalidName(String),

    #[error("server '{server}' is missing secrets in the store: {}", .missing.join(", "))]
    MissingSecret { server: String, missing: Vec<String> },

    #[error("secret '{secret}' must be namespaced as '{server}.<key>'")]
    SecretNotNamespaced { server: String, secret: String },

    #[error("invalid volume '{volume}': {reason}")]
    InvalidVolumeShape { volume: String, reason: String },

    #[error("invalid reference in env value '{value}': {reason}")]
    InvalidEnvReference { value: String, reason: String },

    #[error("server '{server}' references undeclared parameter '{parameter}'")]
    UndeclaredParameter { server: String, parameter: String },

    #[error("server name '{name}' does not match its directory '{directory}'")]
    DirectoryMismatch { name: String, directory: String },

    #[error("server '{0}' has no title")]
    MissingTitle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
