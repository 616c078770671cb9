//! Tests for `regcheck check`.

use crate::support::commands::regcheck_at;
use crate::support::*;

#[test]
fn test_check_passing_server() {
    let t = Test::with_servers(&[("good", GOOD_SERVER)]);
    t.write_secrets(GOOD_SECRETS);

    let output = t.check(&["good"]);
    assert_success(&output);
    assert_stdout_contains(&output, "✓ good");
}

#[test]
fn test_check_failing_server_exits_nonzero() {
    let t = Test::with_servers(&[("good", GOOD_SERVER)]);

    let output = t.check(&["good"]);
    assert_failure(&output);
    assert_stdout_contains(&output, "✗ good");
    assert_stdout_contains(&output, "good.token");
    assert_stderr_contains(&output, "1 check(s) failed");
}

#[test]
fn test_check_all_fixture_registry() {
    let output = regcheck_at(&fixture_root())
        .args(["check", "--all"])
        .output()
        .unwrap();

    assert_failure(&output);
    let out = stdout(&output);
    assert!(out.contains("✓ astra-db"));
    assert!(out.contains("✓ arxiv-mcp-server"));
    assert!(out.contains("✓ markdownify"));
    assert!(out.contains("✗ bad-server"));
    assert!(out.contains("bad-server.api_key"));
    assert!(out.contains("4 servers checked"));
}

#[test]
fn test_check_without_names_checks_everything() {
    let t = Test::with_servers(&[("good", GOOD_SERVER), ("leaky", BAD_VOLUME_SERVER)]);
    t.write_secrets(GOOD_SECRETS);

    let output = t.cmd().arg("check").output().unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, "✓ good");
    assert_stdout_contains(&output, "✗ leaky");
    assert_stdout_contains(&output, "volumes");
}

#[test]
fn test_check_json_report() {
    let t = Test::with_servers(&[("good", GOOD_SERVER), ("leaky", BAD_VOLUME_SERVER)]);
    t.write_secrets(GOOD_SECRETS);

    let output = t.check_json();
    assert_failure(&output);

    let json = stdout_json(&output);
    let servers = json["servers"].as_array().unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0]["server"], "good");
    assert_eq!(servers[1]["server"], "leaky");

    let failing: Vec<&str> = servers[1]["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|o| o.get("error").is_some())
        .map(|o| o["check"].as_str().unwrap())
        .collect();
    assert_eq!(failing, vec!["volumes"]);
}

#[test]
fn test_check_unknown_server() {
    let t = Test::new();

    let output = t.check(&["ghost"]);
    assert_failure(&output);
    assert_stdout_contains(&output, "server not found: ghost");
}

#[test]
fn test_check_all_conflicts_with_names() {
    let t = Test::new();

    let output = t.cmd().args(["check", "--all", "good"]).output().unwrap();
    assert_failure(&output);
}
