//! Check command.
//!
//! Runs every validation check for the selected servers and reports the
//! outcome per server.

use std::path::Path;

use crate::cli::output;
use crate::core::domain::{Report, ServerReport};
use crate::core::registry::Registry;
use crate::core::validation;
use crate::error::{Error, Result};

/// Check the named servers, or every server with `all`.
///
/// With neither names nor `all`, every server is checked.
pub fn execute(root: &Path, names: &[String], all: bool, json: bool) -> Result<()> {
    let registry = Registry::open(root)?;

    let report = if all || names.is_empty() {
        validation::check_all(&registry)?
    } else {
        let servers = names
            .iter()
            .map(|name| validation::check_server(&registry, name))
            .collect::<Result<Vec<_>>>()?;
        Report { servers }
    };

    if json {
        output::data(&serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    match report.failure_count() {
        0 => Ok(()),
        n => Err(Error::ChecksFailed(n)),
    }
}

fn print_report(report: &Report) {
    if report.servers.is_empty() {
        output::dimmed("no servers found");
        return;
    }

    for server in &report.servers {
        print_server(server);
    }

    let failed = report.servers.iter().filter(|s| !s.passed()).count();
    output::section("Summary");
    output::list_item(&format!(
        "{} server{} checked",
        report.servers.len(),
        if report.servers.len() == 1 { "" } else { "s" }
    ));
    output::list_item(&format!("{} failing", failed));
}

fn print_server(server: &ServerReport) {
    let name = output::server(&server.server);
    if server.passed() {
        output::success(&name);
        return;
    }

    output::failure(&name);
    for outcome in server.failures() {
        if let Some(error) = &outcome.error {
            output::detail(outcome.check.as_str(), error);
        }
    }
}
