//! Server metadata validation.
//!
//! Each check is available on its own, taking the registry explicitly, and
//! [`check_server`] / [`check_all`] run every check and collect the outcomes
//! into a report. Only an invalid name or an unloadable server file ends a
//! server's run early, since the remaining checks need the file.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::domain::{
    Check, Placeholder, Report, SecretStore, Server, ServerReport, VolumeSpec,
};
use crate::core::registry::Registry;
use crate::error::{Result, ValidationError};

static SERVER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

type CheckResult = std::result::Result<(), ValidationError>;

/// Validate a server name.
///
/// Names are lowercase alphanumeric segments separated by single hyphens.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` for anything else.
pub fn validate_name(name: &str) -> Result<()> {
    Ok(check_name(name)?)
}

/// Validate that every secret a server declares exists in the store.
///
/// Succeeds trivially when the server declares no secrets.
///
/// # Errors
///
/// Returns `ValidationError::SecretNotNamespaced` for a secret outside the
/// server's namespace, `ValidationError::MissingSecret` listing every key
/// absent from the store, or a registry error if the server can't be loaded.
pub fn validate_secrets(registry: &Registry, name: &str) -> Result<()> {
    let server = registry.server(name)?;
    if server.config.secrets.is_empty() {
        return Ok(());
    }

    let store = registry.secret_store()?;
    Ok(check_secrets(name, &server, &store)?)
}

/// Validate a server's run volumes.
///
/// # Errors
///
/// Returns `ValidationError::InvalidVolumeShape` for a volume that matches
/// neither the parameter nor the filter form, or references another server,
/// and `ValidationError::UndeclaredParameter` for a parameter missing from
/// the server's parameters schema.
pub fn validate_run_volumes(registry: &Registry, name: &str) -> Result<()> {
    let server = registry.server(name)?;
    Ok(check_volumes(name, &server)?)
}

/// Validate that the declared name matches the server's directory.
pub fn validate_directory(registry: &Registry, name: &str) -> Result<()> {
    let server = registry.server(name)?;
    Ok(check_directory(name, &server)?)
}

/// Validate that the server has a title.
pub fn validate_title(registry: &Registry, name: &str) -> Result<()> {
    let server = registry.server(name)?;
    Ok(check_title(name, &server)?)
}

/// Validate placeholders in the server's environment values.
pub fn validate_env_references(registry: &Registry, name: &str) -> Result<()> {
    let server = registry.server(name)?;
    Ok(check_env_references(name, &server)?)
}

/// Run every check for one server.
///
/// # Errors
///
/// Only fails if the secrets store exists but cannot be read; check
/// failures are recorded in the report.
pub fn check_server(registry: &Registry, name: &str) -> Result<ServerReport> {
    let store = registry.secret_store()?;
    Ok(run_checks(registry, &store, name))
}

/// Run every check for every server in the registry, sorted by name.
pub fn check_all(registry: &Registry) -> Result<Report> {
    let store = registry.secret_store()?;
    let servers = registry
        .server_names()?
        .iter()
        .map(|name| run_checks(registry, &store, name))
        .collect();

    Ok(Report { servers })
}

fn run_checks(registry: &Registry, store: &SecretStore, name: &str) -> ServerReport {
    debug!(server = name, "running checks");
    let mut report = ServerReport::new(name);
    let name_check = check_name(name);
    let valid_name = name_check.is_ok();
    report.record(Check::Name, name_check);
    if !valid_name {
        return report;
    }

    let server = match registry.server(name) {
        Ok(server) => {
            report.record::<String>(Check::File, Ok(()));
            server
        }
        Err(e) => {
            report.record(Check::File, Err(e));
            return report;
        }
    };

    report.record(Check::Directory, check_directory(name, &server));
    report.record(Check::Title, check_title(name, &server));
    report.record(Check::Secrets, check_secrets(name, &server, store));
    report.record(Check::Volumes, check_volumes(name, &server));
    report.record(Check::Env, check_env_references(name, &server));

    debug!(server = name, passed = report.passed(), "checks finished");
    report
}

fn check_name(name: &str) -> CheckResult {
    if SERVER_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName(name.to_string()))
    }
}

fn check_directory(directory: &str, server: &Server) -> CheckResult {
    if server.name == directory {
        return Ok(());
    }

    Err(ValidationError::DirectoryMismatch {
        name: server.name.clone(),
        directory: directory.to_string(),
    })
}

fn check_title(name: &str, server: &Server) -> CheckResult {
    match server.about.title.as_deref() {
        Some(title) if !title.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingTitle(name.to_string())),
    }
}

fn check_secrets(name: &str, server: &Server, store: &SecretStore) -> CheckResult {
    let prefix = format!("{}.", name);
    let mut missing = Vec::new();

    for secret in server.secret_names() {
        if !secret.starts_with(&prefix) || secret.len() == prefix.len() {
            return Err(ValidationError::SecretNotNamespaced {
                server: name.to_string(),
                secret: secret.to_string(),
            });
        }
        if !store.contains(secret) {
            missing.push(secret.to_string());
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    debug!(server = name, missing = missing.len(), "secrets missing from store");
    Err(ValidationError::MissingSecret {
        server: name.to_string(),
        missing,
    })
}

fn check_volumes(name: &str, server: &Server) -> CheckResult {
    for volume in &server.run.volumes {
        let spec: VolumeSpec = volume.parse()?;
        let source = spec.source();

        if source.server != name {
            return Err(ValidationError::InvalidVolumeShape {
                volume: volume.clone(),
                reason: format!(
                    "parameter belongs to '{}', expected '{}'",
                    source.server, name
                ),
            });
        }
        check_declared(name, server, source)?;
    }

    Ok(())
}

fn check_env_references(name: &str, server: &Server) -> CheckResult {
    let values = server.config.env.iter().filter_map(|e| e.value.as_deref());

    for value in values {
        for placeholder in Placeholder::scan(value) {
            let placeholder = placeholder.map_err(|raw| ValidationError::InvalidEnvReference {
                value: value.to_string(),
                reason: format!("'{}' is not a server.param reference", raw),
            })?;

            if placeholder.server != name {
                return Err(ValidationError::InvalidEnvReference {
                    value: value.to_string(),
                    reason: format!(
                        "parameter belongs to '{}', expected '{}'",
                        placeholder.server, name
                    ),
                });
            }
            check_declared(name, server, &placeholder)?;
        }
    }

    Ok(())
}

fn check_declared(name: &str, server: &Server, placeholder: &Placeholder) -> CheckResult {
    if !server.has_parameters() || server.declares_parameter(placeholder.root_parameter()) {
        return Ok(());
    }

    Err(ValidationError::UndeclaredParameter {
        server: name.to_string(),
        parameter: placeholder.parameter.clone(),
    })
}
