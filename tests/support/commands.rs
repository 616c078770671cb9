//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a regcheck command pointed at this registry.
    ///
    /// Colors are disabled so assertions can match plain text.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("regcheck").expect("failed to find regcheck binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("REGCHECK_LOG");
        cmd.env_remove("REGCHECK_ROOT");
        cmd.arg("--root").arg(self.root());
        cmd
    }

    /// Shortcut for `regcheck check <names>`.
    pub fn check(&self, names: &[&str]) -> Output {
        self.cmd()
            .arg("check")
            .args(names)
            .output()
            .expect("failed to run regcheck check")
    }

    /// Shortcut for `regcheck check --all --json`.
    pub fn check_json(&self) -> Output {
        self.cmd()
            .args(["check", "--all", "--json"])
            .output()
            .expect("failed to run regcheck check --json")
    }

    /// Shortcut for `regcheck name <name>`.
    pub fn name(&self, name: &str) -> Output {
        self.cmd()
            .args(["name", name])
            .output()
            .expect("failed to run regcheck name")
    }

    /// Shortcut for `regcheck list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run regcheck list")
    }

    /// Shortcut for `regcheck list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run regcheck list --json")
    }
}

/// A regcheck command pointed at an arbitrary root.
pub fn regcheck_at(root: &std::path::Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("regcheck").expect("failed to find regcheck binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("REGCHECK_LOG");
    cmd.arg("--root").arg(root);
    cmd
}
