//! SecretStore type.
//!
//! The registry's secrets store: a dotenv-format file mapping secret keys
//! (such as `astra-db.token`) to values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};

/// A parsed secrets store
#[derive(Debug, Clone)]
pub struct SecretStore {
    entries: BTreeMap<String, String>,
    path: PathBuf,
}

impl SecretStore {
    /// Parse a secrets store from disk.
    ///
    /// Skips empty lines and comments (lines starting with #). Values may be
    /// bare, single quoted, or double quoted with escapes. A missing file
    /// yields an empty store, so servers without secrets still validate.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ReadFile` if the file exists but cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "secrets store not found, treating as empty");
            return Ok(Self::from_pairs(Vec::new(), path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&contents, path.to_path_buf());
        debug!(path = %path.display(), keys = store.len(), "secrets store loaded");

        Ok(store)
    }

    /// Parse store contents already in memory.
    pub fn parse(contents: &str, path: PathBuf) -> Self {
        let mut entries = BTreeMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), parse_value(value.trim()));
            }
        }

        Self { entries, path }
    }

    /// Create from raw key-value pairs
    pub fn from_pairs(pairs: Vec<(String, String)>, path: PathBuf) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
            path,
        }
    }

    /// Whether a key is present with a non-empty value
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
