//! regcheck - metadata linter for server registry repositories.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Run every check for servers
//! │   ├── name          # Validate a name string
//! │   ├── list          # List registry servers
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .regcheck.toml management
//!     ├── constants     # File names and recognized filters
//!     ├── domain/       # Server, SecretStore, VolumeSpec, Report
//!     ├── registry      # Repository root and file resolution
//!     └── validation    # The checks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use regcheck::{validate_name, validate_secrets, Registry};
//!
//! # fn main() -> regcheck::error::Result<()> {
//! validate_name("astra-db")?;
//!
//! let registry = Registry::open("path/to/registry")?;
//! validate_secrets(&registry, "astra-db")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::domain::{Check, Report, SecretStore, Server, ServerReport, VolumeSpec};
pub use crate::core::registry::Registry;
pub use crate::core::validation::{
    check_all, check_server, validate_directory, validate_env_references, validate_name,
    validate_run_volumes, validate_secrets, validate_title,
};
pub use crate::error::{Error, Result};
