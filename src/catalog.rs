//! # Toolchain Catalog
//!
//! Builds the sorted mapping from Java version to installation directory that
//! every toolchain decision is made against.
//!
//! ## Sources
//!
//! 1.  **Environment**: variables named `JAVA_HOME_<version>_<arch>`, as set by
//!     GitHub Actions and most CI images. The prefix is stripped and the key is
//!     cut at the next `_`, discarding the architecture suffix.
//! 2.  **Properties**: settings named `javaHome.<version>`.
//!
//! Properties are applied after the environment, so a property overrides an
//! environment entry for the same version. Within a single source, two keys
//! that resolve to the same version but different paths are rejected: which
//! one "wins" would otherwise depend on iteration order.
//!
//! Every key that carries one of the prefixes must parse. A malformed key is
//! a hard error here instead of a confusing compiler failure much later.
//!
//! The catalog never changes after `build` returns and can be shared freely.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::version::JavaVersion;

/// Environment variable prefix for installed JDKs.
pub const ENVIRONMENT_VAR_PREFIX: &str = "JAVA_HOME_";

/// Property key prefix for installed JDKs.
pub const PROPERTY_PREFIX: &str = "javaHome.";

/// Where a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Environment,
    Property,
}

impl EntrySource {
    fn describe(self) -> &'static str {
        match self {
            EntrySource::Environment => "environment variables",
            EntrySource::Property => "properties",
        }
    }
}

/// One installed toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainEntry {
    pub version: JavaVersion,
    pub path: PathBuf,
    pub source: EntrySource,
}

/// Installed toolchains, keyed and sorted by version.
#[derive(Debug, Clone, Default)]
pub struct ToolchainCatalog {
    entries: BTreeMap<JavaVersion, ToolchainEntry>,
}

impl ToolchainCatalog {
    /// Build a catalog from environment variables and properties.
    ///
    /// Entries whose key lacks the relevant prefix are ignored. Relative
    /// paths are resolved against `project_dir`.
    pub fn build<E, P, K, V, K2, V2>(environment: E, properties: P, project_dir: &Path) -> Result<Self>
    where
        E: IntoIterator<Item = (K, V)>,
        P: IntoIterator<Item = (K2, V2)>,
        K: AsRef<str>,
        V: AsRef<str>,
        K2: AsRef<str>,
        V2: AsRef<str>,
    {
        let from_env = collect_source(
            environment,
            EntrySource::Environment,
            project_dir,
            |key| {
                let rest = key.strip_prefix(ENVIRONMENT_VAR_PREFIX)?;
                Some(rest.split('_').next().unwrap_or(rest))
            },
        )?;
        let from_properties = collect_source(
            properties,
            EntrySource::Property,
            project_dir,
            |key| key.strip_prefix(PROPERTY_PREFIX),
        )?;

        let mut entries = from_env;
        for (version, entry) in from_properties {
            if let Some(replaced) = entries.insert(version, entry) {
                debug!(
                    "javaHome.{} overrides {}{}_* ({})",
                    version,
                    ENVIRONMENT_VAR_PREFIX,
                    version,
                    replaced.path.display()
                );
            }
        }

        for entry in entries.values() {
            debug!(
                "toolchain: Java {} at {} (from {})",
                entry.version,
                entry.path.display(),
                entry.source.describe()
            );
        }

        Ok(Self { entries })
    }

    /// A catalog holding exactly the given installations.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = (JavaVersion, P)>,
        P: Into<PathBuf>,
    {
        let entries = paths
            .into_iter()
            .map(|(version, path)| {
                (
                    version,
                    ToolchainEntry {
                        version,
                        path: path.into(),
                        source: EntrySource::Property,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Installation directory for exactly `version`.
    pub fn get(&self, version: JavaVersion) -> Option<&Path> {
        self.entries.get(&version).map(|entry| entry.path.as_path())
    }

    /// The lowest installed toolchain whose version is at least `version`.
    pub fn lowest_at_least(&self, version: JavaVersion) -> Option<&ToolchainEntry> {
        self.entries.range(version..).next().map(|(_, entry)| entry)
    }

    /// All entries in ascending version order.
    pub fn entries(&self) -> impl Iterator<Item = &ToolchainEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma separated version list for messages, `none` when empty.
    pub fn describe_versions(&self) -> String {
        if self.entries.is_empty() {
            return "none".to_string();
        }
        self.entries
            .keys()
            .map(JavaVersion::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn collect_source<I, K, V>(
    source: I,
    kind: EntrySource,
    project_dir: &Path,
    version_part: impl Fn(&str) -> Option<&str>,
) -> Result<BTreeMap<JavaVersion, ToolchainEntry>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut found = BTreeMap::new();

    for (key, value) in source {
        let Some(raw) = version_part(key.as_ref()) else {
            continue;
        };
        let version = JavaVersion::parse(raw)?;
        let path = project_dir.join(value.as_ref());

        match found.entry(version) {
            Entry::Vacant(slot) => {
                slot.insert(ToolchainEntry {
                    version,
                    path,
                    source: kind,
                });
            }
            Entry::Occupied(existing) if existing.get().path == path => {}
            Entry::Occupied(existing) => {
                return Err(Error::DuplicateToolchain {
                    version,
                    source_kind: kind.describe(),
                    first: existing.get().path.clone(),
                    second: path,
                });
            }
        }
    }

    Ok(found)
}
