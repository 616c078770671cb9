//! Tests for `regcheck name`.

use crate::support::*;

#[test]
fn test_valid_name() {
    let t = Test::new();

    let output = t.name("my-server-1");
    assert_success(&output);
    assert_stdout_contains(&output, "my-server-1 is a valid server name");
}

#[test]
fn test_invalid_names() {
    let t = Test::new();

    for name in ["My-Server", "my-server-$", "my server", "my-server/1"] {
        let output = t.name(name);
        assert_failure(&output);
        assert_stderr_contains(&output, "invalid server name");
    }
}

#[test]
fn test_name_does_not_need_registry() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");

    let output = crate::support::commands::regcheck_at(&missing)
        .args(["name", "fine"])
        .output()
        .unwrap();
    assert_success(&output);
}
