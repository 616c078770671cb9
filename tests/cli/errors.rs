//! Tests for error handling and CLI flags.

use crate::support::commands::regcheck_at;
use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "regcheck");
}

#[test]
fn test_missing_root_shows_hint() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = regcheck_at(&dir.path().join("missing"))
        .arg("list")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "registry root not found");
    assert_stderr_contains(&output, "--root");
}

#[test]
fn test_missing_servers_dir() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = regcheck_at(dir.path()).arg("list").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "servers directory not found");
}

#[test]
fn test_invalid_config_reported() {
    let t = Test::new();
    t.write_config("[regcheck]\nservers_dir = \"/etc\"\n");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "servers_dir");
}

#[test]
fn test_root_from_environment() {
    let t = Test::with_servers(&[("env-root", "name: env-root\n")]);

    #[allow(deprecated)]
    let output = assert_cmd::Command::cargo_bin("regcheck")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("REGCHECK_ROOT", t.root())
        .arg("list")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "env-root");
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "regcheck");
}
