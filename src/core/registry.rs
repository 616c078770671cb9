//! The primary interface to a registry repository.
//!
//! Registry owns the repository root and its configuration, and resolves
//! every file the checks read. Nothing here depends on the process working
//! directory.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{SecretStore, Server};
use crate::core::validation;
use crate::error::{RegistryError, Result};

/// An opened registry repository.
#[derive(Debug, Clone)]
pub struct Registry {
    root: PathBuf,
    config: Config,
}

impl Registry {
    /// Open the registry rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::RootNotFound` if `root` is not a directory,
    /// or a `ConfigError` if `.regcheck.toml` is present but invalid.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(RegistryError::RootNotFound(root.to_path_buf()).into());
        }

        let config = Config::load(root)?;
        debug!(root = %root.display(), "registry opened");

        Ok(Self::with_config(root, config))
    }

    /// Build a registry from an explicit configuration, skipping the config file.
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory holding one subdirectory per server
    pub fn servers_dir(&self) -> PathBuf {
        self.root.join(&self.config.regcheck.servers_dir)
    }

    /// Directory of a single server
    pub fn server_dir(&self, name: &str) -> PathBuf {
        self.servers_dir().join(name)
    }

    /// Path to a server's `server.yaml`
    pub fn server_file(&self, name: &str) -> PathBuf {
        self.server_dir(name).join(constants::SERVER_FILE)
    }

    /// Path to the secrets store
    pub fn secrets_file(&self) -> PathBuf {
        self.root.join(&self.config.regcheck.secrets_file)
    }

    /// Load a server's configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` before touching the filesystem
    /// if `name` is not a valid server name, `RegistryError::ServerNotFound`
    /// if the server has no `server.yaml`, or a read/parse error for a
    /// malformed one.
    pub fn server(&self, name: &str) -> Result<Server> {
        validation::validate_name(name)?;

        let path = self.server_file(name);
        if !path.is_file() {
            return Err(RegistryError::ServerNotFound(name.to_string()).into());
        }

        debug!(server = name, path = %path.display(), "loading server");
        Server::load(&path)
    }

    /// Load the secrets store.
    pub fn secret_store(&self) -> Result<SecretStore> {
        SecretStore::load(self.secrets_file())
    }

    /// Names of every server directory, sorted.
    ///
    /// Hidden directories and plain files under the servers directory are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ServersDirNotFound` if the directory is missing.
    pub fn server_names(&self) -> Result<Vec<String>> {
        let dir = self.servers_dir();
        if !dir.is_dir() {
            return Err(RegistryError::ServersDirNotFound(dir).into());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        names.sort();

        debug!(count = names.len(), "servers discovered");
        Ok(names)
    }
}
