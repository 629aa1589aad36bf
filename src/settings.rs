//! # Settings
//!
//! Key/value inputs that come from outside the project descriptor:
//! `.properties` files, `-P` overrides and environment variables.
//!
//! Nothing in the library reads the process environment on its own. The CLI
//! snapshots it into an [`Environment`] once and threads it through, which
//! keeps every decision reproducible in tests.
//!
//! ## Layers
//!
//! Properties are layered like Gradle's: the project's
//! `multirelease.properties`, then the user-level file, then `-P` flags. A
//! later layer replaces keys of an earlier one.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ini::Ini;
use log::debug;

use crate::error::{Error, Result};

/// Property that sets strict toolchain selection explicitly.
pub const STRICT_PROPERTY: &str = "strictMultireleaseVersions";

/// Environment flag set by GitHub Actions, Travis and most other CI services.
pub const CI_ENV: &str = "CI";

/// A snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Capture the current process environment, skipping non UTF-8 entries.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Layered `.properties` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the contents of a `.properties` file.
    pub fn parse(content: &str) -> Result<Self> {
        let ini = Ini::load_from_str(content)?;
        let values = ini
            .section(None::<String>)
            .map(|section| {
                section
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self { values })
    }

    /// Load a properties file; a missing file is an empty layer.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("no properties at {}", path.display());
            return Ok(Self::default());
        }
        debug!("loading properties from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| Error::ConfigParse {
            message: format!("{}: {}", path.display(), e),
            hint: None,
        })
    }

    /// Apply `other` on top of this layer.
    pub fn extend(&mut self, other: Properties) {
        self.values.extend(other.values);
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse a `-P key=value` override.
pub fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// `true` only for a case-insensitive `"true"`, like `String.toBoolean`.
pub fn to_boolean(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Decide whether toolchains are applied strictly.
///
/// An explicit setting wins; otherwise the `strictMultireleaseVersions`
/// property, then the `CI` environment flag, then `false`.
pub fn resolve_strict(explicit: Option<bool>, properties: &Properties, environment: &Environment) -> bool {
    explicit
        .or_else(|| properties.get(STRICT_PROPERTY).map(to_boolean))
        .or_else(|| environment.get(CI_ENV).map(to_boolean))
        .unwrap_or(false)
}
