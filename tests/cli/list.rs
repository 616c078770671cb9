//! Tests for `regcheck list`.

use crate::support::*;

#[test]
fn test_list_servers() {
    let t = Test::with_servers(&[("zeta", "name: zeta\n"), ("alpha", "name: alpha\n")]);

    let output = t.list();
    assert_success(&output);
    let out = stdout(&output);
    let alpha = out.find("alpha").unwrap();
    let zeta = out.find("zeta").unwrap();
    assert!(alpha < zeta, "servers should be sorted: {}", out);
}

#[test]
fn test_list_empty_registry() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no servers found");
}

#[test]
fn test_list_json() {
    let t = Test::with_servers(&[("one", "name: one\n")]);
    t.write_secrets("one.token=abc\none.user=me\n");

    let output = t.list_json();
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["servers"][0], "one");
    assert_eq!(json["servers_dir"], "servers");
    assert_eq!(json["root"], t.root().to_str().unwrap());
    assert_eq!(
        json["secrets_file"],
        t.root().join("secrets.env").to_str().unwrap()
    );
    assert_eq!(json["secret_keys"], serde_json::json!(["one.token", "one.user"]));
}

#[test]
fn test_list_json_never_prints_secret_values() {
    let t = Test::with_servers(&[("one", "name: one\n")]);
    t.write_secrets("one.token=very-secret-value\n");

    let output = t.list_json();
    assert_success(&output);
    assert!(!stdout(&output).contains("very-secret-value"));
}
