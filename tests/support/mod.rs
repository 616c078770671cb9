//! Test support utilities for regcheck integration tests.
//!
//! Provides an isolated registry in a temp directory plus helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated registry directory.
///
/// Commands run against the registry through `--root`, never by changing
/// the process working directory, so tests can safely run in parallel.
pub struct Test {
    /// Registry root
    pub dir: TempDir,
}

impl Test {
    /// Create an empty registry with a `servers/` directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("servers")).expect("failed to create servers dir");
        Self { dir }
    }

    /// Create a registry holding the given servers.
    pub fn with_servers(servers: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, yaml) in servers {
            t.write_server(name, yaml);
        }
        t
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `servers/<name>/server.yaml`.
    pub fn write_server(&self, name: &str, yaml: &str) {
        let dir = self.root().join("servers").join(name);
        fs::create_dir_all(&dir).expect("failed to create server dir");
        fs::write(dir.join("server.yaml"), yaml).expect("failed to write server.yaml");
    }

    /// Write the default secrets store.
    pub fn write_secrets(&self, contents: &str) {
        fs::write(self.root().join("secrets.env"), contents).expect("failed to write secrets");
    }

    /// Write `.regcheck.toml`.
    pub fn write_config(&self, contents: &str) {
        fs::write(self.root().join(".regcheck.toml"), contents).expect("failed to write config");
    }
}

/// Root of the checked-in fixture registry.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("registry")
}
