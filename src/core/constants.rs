//! Constants used throughout regcheck.
//!
//! Centralizes file names and the vocabulary of recognized volume filters.

/// Tool configuration file name, looked up at the registry root.
pub const CONFIG_FILE: &str = ".regcheck.toml";

/// Default directory holding one subdirectory per server.
pub const SERVERS_DIR: &str = "servers";

/// Per-server configuration file name.
pub const SERVER_FILE: &str = "server.yaml";

/// Default secrets store file name, relative to the registry root.
pub const SECRETS_FILE: &str = "secrets.env";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "REGCHECK_LOG";

/// Filters allowed in the filter form of a volume declaration.
pub const VOLUME_FILTERS: &[&str] = &["volume", "volume-target", "into"];
