//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and descriptor snippets to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::LAYERED);
//!     fixture.command().arg("plan").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common descriptor snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Base release only.
    pub const BASE_ONLY: &str = "base: 8\n";

    /// A typical library: module descriptor, collections, records.
    pub const LAYERED: &str = r#"
base: 8
targets:
  - release: 9
  - release: 11
  - release: 17
"#;

    /// Test-only targets, including one that reruns the base tests.
    pub const TEST_MATRIX: &str = r#"
base: 8
targets:
  - release: 8
    type: test
  - release: 11
    type: test
  - release: 17
    type: test
"#;

    /// Two targets with the same release.
    pub const DUPLICATE_TARGET: &str = r#"
base: 8
targets:
  - release: 11
  - release: 11
"#;

    /// A target below the base release.
    pub const BELOW_BASE: &str = r#"
base: 11
targets:
  - release: 9
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "base: [unclosed\n";
}

/// A temporary project directory with an optional descriptor.
///
/// Commands created from the fixture run with an empty environment, plain
/// output and a user properties path inside the fixture, so nothing from the
/// machine running the tests leaks into a plan.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.multirelease.yaml` descriptor with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".multirelease.yaml", content)
    }

    /// Add the project's `multirelease.properties`.
    #[allow(dead_code)]
    pub fn with_properties(self, content: &str) -> Self {
        self.with_file("multirelease.properties", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the descriptor.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join(".multirelease.yaml")
    }

    /// Path used as the user-level properties file.
    pub fn user_properties_path(&self) -> PathBuf {
        self.temp_dir.path().join("user.properties")
    }

    /// A command running in the fixture directory with an isolated environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("multirelease");
        cmd.current_dir(self.path())
            .env_clear()
            .env("MULTIRELEASE_USER_PROPERTIES", self.user_properties_path())
            .arg("--color")
            .arg("never");
        cmd
    }

    /// Like [`command`](Self::command), with the running JDK fixed to `version`.
    #[allow(dead_code)]
    pub fn command_running(&self, version: u32) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("--running-version").arg(version.to_string());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::BASE_ONLY);
        assert!(fixture.config_path().exists());
        assert!(!fixture.user_properties_path().exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        let configs = [
            configs::BASE_ONLY,
            configs::LAYERED,
            configs::TEST_MATRIX,
            configs::DUPLICATE_TARGET,
            configs::BELOW_BASE,
        ];

        for config in configs {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
