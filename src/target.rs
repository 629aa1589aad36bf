//! Target declarations: which release a variant is written against and
//! which JDK compiles it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::version::JavaVersion;

/// Extra settings applied after a unit's compiler options are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PostConfigure {
    /// Appended to the javac arguments (e.g. `--enable-preview`).
    #[serde(default)]
    pub compiler_args: Vec<String>,
    /// Passed to the JVM running the unit's tests.
    #[serde(default)]
    pub jvm_args: Vec<String>,
}

impl PostConfigure {
    pub fn is_empty(&self) -> bool {
        self.compiler_args.is_empty() && self.jvm_args.is_empty()
    }
}

/// The exact target version to be used for both source
/// and execution.
///
/// `toolchain` may be newer than `release` (javac can emit older bytecode)
/// but never older; the constructor enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion {
    release: JavaVersion,
    toolchain: JavaVersion,
    post_configure: PostConfigure,
}

impl TargetVersion {
    pub fn new(release: JavaVersion, toolchain: JavaVersion) -> Result<Self> {
        if toolchain < release {
            return Err(Error::IncompatibleToolchain { release, toolchain });
        }
        Ok(Self {
            release,
            toolchain,
            post_configure: PostConfigure::default(),
        })
    }

    /// Target compiled and run on the JDK matching its release.
    pub fn of(version: JavaVersion) -> Self {
        Self {
            release: version,
            toolchain: version,
            post_configure: PostConfigure::default(),
        }
    }

    pub fn with_post_configure(mut self, post_configure: PostConfigure) -> Self {
        self.post_configure = post_configure;
        self
    }

    pub fn release(&self) -> JavaVersion {
        self.release
    }

    pub fn toolchain(&self) -> JavaVersion {
        self.toolchain
    }

    pub fn post_configure(&self) -> &PostConfigure {
        &self.post_configure
    }
}

/// Whether a target version will be applied to the main source set only, the
/// test source set only, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Main,
    Test,
    #[default]
    Both,
}

impl TargetType {
    pub fn main(self) -> bool {
        matches!(self, TargetType::Main | TargetType::Both)
    }

    pub fn test(self) -> bool {
        matches!(self, TargetType::Test | TargetType::Both)
    }
}
