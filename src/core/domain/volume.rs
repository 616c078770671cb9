//! Volume declarations and parameter placeholders.
//!
//! A volume is declared either in parameter form,
//! `{{server.param}}:/container/path[:ro|:rw]`, or in filter form,
//! `{{server.param|volume|into}}`, where the filters expand the parameter
//! into one or more mounts at run time.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::constants::VOLUME_FILTERS;
use crate::error::ValidationError;

static PARAMETER_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{([^{}|:]+)\}\}:(/[^:]*)(?::(ro|rw))?$").expect("valid regex")
});

static FILTER_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{([^{}|]+)((?:\|[^{}|]*)+)\}\}$").expect("valid regex"));

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]+(?:-[a-z0-9]+)*)\.([A-Za-z0-9_][A-Za-z0-9_.-]*)$")
        .expect("valid regex")
});

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("valid regex"));

/// A `server.param` reference inside `{{ }}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub server: String,
    pub parameter: String,
}

impl Placeholder {
    /// Top-level parameter name, the segment before any nested `.`
    pub fn root_parameter(&self) -> &str {
        self.parameter
            .split_once('.')
            .map_or(self.parameter.as_str(), |(root, _)| root)
    }

    fn parse(inner: &str) -> Option<Self> {
        let caps = REFERENCE.captures(inner.trim())?;
        Some(Self {
            server: caps[1].to_string(),
            parameter: caps[2].to_string(),
        })
    }

    /// Every placeholder in a templated string, with filters stripped.
    ///
    /// Returns the raw inner text for any placeholder that is not a valid
    /// `server.param` reference.
    pub fn scan(template: &str) -> Vec<std::result::Result<Self, String>> {
        PLACEHOLDER
            .captures_iter(template)
            .map(|caps| {
                let inner = &caps[1];
                let reference = inner.split('|').next().unwrap_or(inner);
                Self::parse(reference).ok_or_else(|| inner.to_string())
            })
            .collect()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.server, self.parameter)
    }
}

/// Access mode suffix of a parameter-form volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ReadOnly,
    ReadWrite,
}

/// A structurally valid volume declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeSpec {
    /// `{{server.param}}:/container/path[:mode]`
    Parameter {
        source: Placeholder,
        target: String,
        mode: Option<Mode>,
    },
    /// `{{server.param|filter|...}}`
    Filter {
        source: Placeholder,
        filters: Vec<String>,
    },
}

impl VolumeSpec {
    /// The parameter the volume is built from
    pub fn source(&self) -> &Placeholder {
        match self {
            Self::Parameter { source, .. } | Self::Filter { source, .. } => source,
        }
    }
}

fn shape_error(volume: &str, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidVolumeShape {
        volume: volume.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for VolumeSpec {
    type Err = ValidationError;

    fn from_str(volume: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(caps) = PARAMETER_FORM.captures(volume) {
            let source = Placeholder::parse(&caps[1]).ok_or_else(|| {
                shape_error(volume, format!("'{}' is not a server.param reference", &caps[1]))
            })?;
            let mode = caps.get(3).map(|m| match m.as_str() {
                "ro" => Mode::ReadOnly,
                _ => Mode::ReadWrite,
            });
            return Ok(Self::Parameter {
                source,
                target: caps[2].to_string(),
                mode,
            });
        }

        if let Some(caps) = FILTER_FORM.captures(volume) {
            let source = Placeholder::parse(&caps[1]).ok_or_else(|| {
                shape_error(volume, format!("'{}' is not a server.param reference", &caps[1]))
            })?;
            let filters: Vec<String> = caps[2]
                .split('|')
                .skip(1)
                .map(|f| f.trim().to_string())
                .collect();
            if let Some(unknown) = filters
                .iter()
                .find(|f| !VOLUME_FILTERS.contains(&f.as_str()))
            {
                return Err(shape_error(
                    volume,
                    format!(
                        "unknown filter '{}', expected one of: {}",
                        unknown,
                        VOLUME_FILTERS.join(", ")
                    ),
                ));
            }
            return Ok(Self::Filter { source, filters });
        }

        Err(shape_error(
            volume,
            "expected '{{server.param}}:/container/path' or '{{server.param|volume}}'",
        ))
    }
}
