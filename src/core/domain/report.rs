//! Check reports.
//!
//! Collects the outcome of every check run against a server so callers can
//! decide how to aggregate and present failures.

use serde::Serialize;
use std::fmt;

/// A single validation check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    Name,
    File,
    Directory,
    Title,
    Secrets,
    Volumes,
    Env,
}

impl Check {
    /// Every check, in the order they are run
    pub const ALL: [Check; 7] = [
        Check::Name,
        Check::File,
        Check::Directory,
        Check::Title,
        Check::Secrets,
        Check::Volumes,
        Check::Env,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Name => "name",
            Check::File => "file",
            Check::Directory => "directory",
            Check::Title => "title",
            Check::Secrets => "secrets",
            Check::Volumes => "volumes",
            Check::Env => "env",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: Check,
    /// Failure message, absent when the check passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// All check outcomes for one server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerReport {
    pub server: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl ServerReport {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            outcomes: Vec::new(),
        }
    }

    /// Record a check result
    pub fn record<E: fmt::Display>(&mut self, check: Check, result: std::result::Result<(), E>) {
        self.outcomes.push(CheckOutcome {
            check,
            error: result.err().map(|e| e.to_string()),
        });
    }

    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Failed outcomes only
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Reports for a set of servers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub servers: Vec<ServerReport>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.servers.iter().all(ServerReport::passed)
    }

    /// Total number of failed checks across all servers
    pub fn failure_count(&self) -> usize {
        self.servers.iter().map(|s| s.failures().count()).sum()
    }
}
