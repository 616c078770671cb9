//! regcheck - metadata linter for server registry repositories.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use regcheck::cli::output;
use regcheck::cli::{execute, Cli};
use regcheck::core::constants;
use regcheck::error::{Error, RegistryError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("regcheck=debug")
        } else {
            EnvFilter::new("regcheck=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.root) {
        let suggestion = match &e {
            Error::Registry(RegistryError::ServerNotFound(_)) => Some("run: regcheck list"),
            Error::Registry(RegistryError::ServersDirNotFound(_))
            | Error::Registry(RegistryError::RootNotFound(_)) => {
                Some("point --root at the registry repository")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
