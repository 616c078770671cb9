//! Server type.
//!
//! The parsed contents of a server's `server.yaml`. Only the fields the
//! checks consume are modeled; anything else in the file is ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{RegistryError, Result};

/// A server entry in the registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Server {
    /// Declared server name
    #[serde(default)]
    pub name: String,
    /// Container image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Entry type, usually `server`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub config: ServerConfig,
    #[serde(default)]
    pub run: Run,
}

/// Human-facing description of the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// User-supplied configuration the server needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Secrets that must exist in the store
    #[serde(default)]
    pub secrets: Vec<SecretDecl>,
    /// Environment variables passed to the server
    #[serde(default)]
    pub env: Vec<EnvDecl>,
    /// JSON-schema-like description of configurable parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

/// A required secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretDecl {
    /// Store key, namespaced as `<server>.<key>`
    pub name: String,
    /// Environment variable the secret is exposed as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// An environment variable, possibly templated from parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Declared parameters schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// How the server is run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub command: Vec<String>,
    /// Volume declarations, see [`super::VolumeSpec`]
    #[serde(default)]
    pub volumes: Vec<String>,
}

impl Server {
    /// Parse a server file from disk
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ReadFile` or `RegistryError::Parse`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let server = serde_yaml::from_str(&contents).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(server)
    }

    /// Names of declared secrets
    pub fn secret_names(&self) -> impl Iterator<Item = &str> {
        self.config.secrets.iter().map(|s| s.name.as_str())
    }

    /// Whether a parameters schema is declared
    pub fn has_parameters(&self) -> bool {
        self.config.parameters.is_some()
    }

    /// Whether `name` is a declared parameter
    pub fn declares_parameter(&self, name: &str) -> bool {
        self.config
            .parameters
            .as_ref()
            .is_some_and(|p| p.properties.contains_key(name))
    }
}
