//! # Project Descriptor
//!
//! This module defines the `.multirelease.yaml` file that declares a
//! project's base release and its layered targets, and turns it into a
//! [`GraphBuilder`].
//!
//! ```yaml
//! base: 8                 # or { release: 8, compile-with: 11 }
//! strict-versions: true   # optional, overrides properties and CI
//! targets:
//!   - release: 9          # module descriptor
//!   - release: 10         # immutable collection types
//!   - release: 15
//!     compiler-args: ["--enable-preview", "-Xlint:-preview"]
//!     jvm-args: ["--enable-preview"]
//!   - release: 8
//!     type: test          # run base tests on a Java 8 JVM
//! ```
//!
//! Declaration order doesn't matter; the graph sorts targets by release.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::GraphBuilder;
use crate::target::{PostConfigure, TargetType, TargetVersion};
use crate::version::JavaVersion;

/// The base release, either bare or with a separate compiler version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseDecl {
    Release(JavaVersion),
    Detailed(BaseSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BaseSpec {
    pub release: JavaVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile_with: Option<JavaVersion>,
}

impl BaseDecl {
    pub fn to_target(&self) -> Result<TargetVersion> {
        match self {
            BaseDecl::Release(release) => Ok(TargetVersion::of(*release)),
            BaseDecl::Detailed(spec) => {
                TargetVersion::new(spec.release, spec.compile_with.unwrap_or(spec.release))
            }
        }
    }
}

/// One entry of `targets:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TargetDecl {
    pub release: JavaVersion,
    /// JDK to compile with; defaults to `release`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile_with: Option<JavaVersion>,
    #[serde(default, rename = "type")]
    pub kind: TargetType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compiler_args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jvm_args: Vec<String>,
}

impl TargetDecl {
    pub fn to_target(&self) -> Result<TargetVersion> {
        let target = TargetVersion::new(self.release, self.compile_with.unwrap_or(self.release))?;
        Ok(target.with_post_configure(PostConfigure {
            compiler_args: self.compiler_args.clone(),
            jvm_args: self.jvm_args.clone(),
        }))
    }
}

/// Parsed `.multirelease.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    pub base: BaseDecl,
    /// Explicit strictness; `None` defers to properties and `CI`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_versions: Option<bool>,
    #[serde(default)]
    pub targets: Vec<TargetDecl>,
}

impl ProjectConfig {
    /// Accumulate the declarations into a builder, base first.
    pub fn to_builder(&self) -> Result<GraphBuilder> {
        let mut builder = GraphBuilder::new();
        builder.base_version(self.base.to_target()?)?;
        for decl in &self.targets {
            builder.target_version(decl.to_target()?, decl.kind)?;
        }
        Ok(builder)
    }

    pub fn base_release(&self) -> JavaVersion {
        match &self.base {
            BaseDecl::Release(release) => *release,
            BaseDecl::Detailed(spec) => spec.release,
        }
    }
}

/// Parse descriptor YAML.
pub fn parse(yaml_content: &str) -> Result<ProjectConfig> {
    serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = hint_for(&message);
        Error::ConfigParse { message, hint }
    })
}

/// Parse a descriptor from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

fn hint_for(message: &str) -> Option<String> {
    if message.contains("missing field `base`") {
        Some("Declare the base release, e.g. 'base: 8'".to_string())
    } else if message.contains("untagged enum BaseDecl") {
        Some(
            "'base' is a version (quote legacy ones: \"1.8\") or a mapping with 'release' and optional 'compile-with'"
                .to_string(),
        )
    } else if message.contains("unknown variant") {
        Some("A target's 'type' is one of: main, test, both".to_string())
    } else if message.contains("quote legacy versions") {
        Some("Write legacy versions as strings, e.g. release: \"1.8\"".to_string())
    } else {
        None
    }
}
