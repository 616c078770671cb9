//! Test fixtures and constants.

/// A server passing every check.
pub const GOOD_SERVER: &str = r#"
name: good
about:
  title: Good Server
config:
  secrets:
    - name: good.token
      env: GOOD_TOKEN
  parameters:
    type: object
    properties:
      data:
        type: string
run:
  volumes:
    - '{{good.data}}:/data:ro'
"#;

/// A server whose only volume has an unrecognized shape.
pub const BAD_VOLUME_SERVER: &str = r#"
name: leaky
about:
  title: Leaky
run:
  volumes:
    - /var/run/docker.sock:/var/run/docker.sock
"#;

/// A server with no title and a name that doesn't match its directory.
pub const MISNAMED_SERVER: &str = r#"
name: something-else
config:
  env:
    - name: URL
      value: '{{something-else.url}}'
"#;

/// Secrets store satisfying GOOD_SERVER.
pub const GOOD_SECRETS: &str = "good.token=s3cret\n";
