//! # Toolchain Selection
//!
//! Decides which JDK compiles or runs a given target.
//!
//! ## Policy
//!
//! - **Lenient** (default for local builds): when the running JDK is already
//!   new enough it is used directly, skipping cross-compilation. Otherwise the
//!   lowest installed toolchain that satisfies the request is used.
//! - **Strict** (default on CI): the running JDK is only used when its version
//!   is exactly the one needed; anything else must come from the catalog.
//!
//! The version needed for compilation is never below the project floor (the
//! base target's toolchain). Execution drops the floor: running a variant only
//! needs the runtime the variant itself asks for.
//!
//! When nothing satisfies the request the selector fails instead of quietly
//! handing back an older JDK.

use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::catalog::ToolchainCatalog;
use crate::error::{Error, Result};
use crate::version::JavaVersion;

/// What a toolchain is being chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Compile,
    Execute,
}

/// Where the selected toolchain lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainSource {
    /// The JDK the planner was invoked with.
    Running,
    /// An entry of the catalog.
    Installed,
}

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedToolchain {
    pub version: JavaVersion,
    pub source: ToolchainSource,
    /// Installation directory; `None` for the running JDK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
}

impl SelectedToolchain {
    pub fn is_running(&self) -> bool {
        self.source == ToolchainSource::Running
    }

    /// Path to `bin/<tool>` of an installed toolchain.
    pub fn executable(&self, tool: &str) -> Option<PathBuf> {
        let name = if cfg!(windows) {
            format!("{}.exe", tool)
        } else {
            tool.to_string()
        };
        self.home.as_deref().map(|home| home.join("bin").join(name))
    }
}

/// Resolves toolchains against a catalog under a strictness policy.
#[derive(Debug, Clone)]
pub struct ToolchainSelector<'a> {
    catalog: &'a ToolchainCatalog,
    running: JavaVersion,
    strict: bool,
}

impl<'a> ToolchainSelector<'a> {
    pub fn new(catalog: &'a ToolchainCatalog, running: JavaVersion, strict: bool) -> Self {
        Self {
            catalog,
            running,
            strict,
        }
    }

    pub fn running(&self) -> JavaVersion {
        self.running
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Select a toolchain of at least `requested`.
    ///
    /// `floor` only applies to [`Purpose::Compile`].
    pub fn select(
        &self,
        requested: JavaVersion,
        floor: JavaVersion,
        purpose: Purpose,
    ) -> Result<SelectedToolchain> {
        let needed = match purpose {
            Purpose::Compile => requested.max(floor),
            Purpose::Execute => requested,
        };

        let running_fits = if self.strict {
            self.running == needed
        } else {
            self.running >= needed
        };
        if running_fits {
            if self.running != requested {
                debug!(
                    "using running Java {} for a request of Java {} ({:?})",
                    self.running, requested, purpose
                );
            }
            return Ok(SelectedToolchain {
                version: self.running,
                source: ToolchainSource::Running,
                home: None,
            });
        }

        match self.catalog.lowest_at_least(needed) {
            Some(entry) => Ok(SelectedToolchain {
                version: entry.version,
                source: ToolchainSource::Installed,
                home: Some(entry.path.clone()),
            }),
            None => Err(Error::NoToolchain {
                requested: needed,
                running: self.running,
                mode: if self.strict { "strict" } else { "lenient" },
                available: self.catalog.describe_versions(),
            }),
        }
    }
}
