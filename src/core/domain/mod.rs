//! Domain types.

mod report;
mod server;
mod store;
mod volume;

pub use report::{Check, CheckOutcome, Report, ServerReport};
pub use server::{About, EnvDecl, Parameters, Run, SecretDecl, Server, ServerConfig};
pub use store::SecretStore;
pub use volume::{Mode, Placeholder, VolumeSpec};
