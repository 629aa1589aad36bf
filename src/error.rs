//! # Error Handling
//!
//! This module defines the centralized error type for the `multirelease`
//! library. It uses the `thiserror` library to build a single `Error` enum
//! covering every failure the planner can hit, with messages written for the
//! person editing the project descriptor.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Almost every variant is a *configuration
//!   error*: it is raised while the target graph is being built and halts
//!   construction before any unit is handed to an executor.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Lenient toolchain substitution is not represented here; it
//! is a non-fatal fallback and only shows up in the debug log.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::JavaVersion;

/// Main error type for multirelease operations
#[derive(Error, Debug)]
pub enum Error {
    /// The `.multirelease.yaml` descriptor or a settings file was malformed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A string could not be interpreted as a Java version.
    #[error("Could not determine java version from '{value}'")]
    VersionParse { value: String },

    /// A target asked to be compiled by a JDK older than its release.
    #[error("The chosen JVM ({toolchain}) must have a version of {release} or newer to compile source for Java {release}")]
    IncompatibleToolchain {
        release: JavaVersion,
        toolchain: JavaVersion,
    },

    /// `finalize` was called without a base version.
    #[error("No base version was declared; every project needs a base release")]
    MissingBaseVersion,

    /// The base version was moved above a target that is already declared.
    #[error("Cannot set project base Java version to {base}, which is not older than the declared multirelease variant {target}")]
    BaseAboveTarget {
        base: JavaVersion,
        target: JavaVersion,
    },

    /// Two targets of the same chain share a release.
    #[error("Java {release} is declared more than once as a {chain} target")]
    DuplicateTarget {
        release: JavaVersion,
        chain: &'static str,
    },

    /// A target does not exceed the base release.
    #[error("Cannot build version {release} as it is lower than (or equal to) the project's base version ({base})")]
    TargetNotAboveBase {
        release: JavaVersion,
        base: JavaVersion,
    },

    /// A target is older than the first release that supports layering.
    #[error("Java {release} cannot be layered; multi-release variants start at Java {minimum}")]
    BelowLayeringMinimum {
        release: JavaVersion,
        minimum: JavaVersion,
    },

    /// One source named two different installations for the same version.
    #[error("Java {version} is defined twice in {source_kind}: '{}' and '{}'", .first.display(), .second.display())]
    DuplicateToolchain {
        version: JavaVersion,
        source_kind: &'static str,
        first: PathBuf,
        second: PathBuf,
    },

    /// No toolchain satisfies a request.
    #[error("No Java toolchain >= {requested} is available ({mode} mode, running Java {running}, installed: {available})")]
    NoToolchain {
        requested: JavaVersion,
        running: JavaVersion,
        mode: &'static str,
        available: String,
    },

    /// The running Java version could not be determined.
    #[error("Could not detect the running Java version: {message}")]
    RuntimeDetection { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `.properties` parsing error, wrapped from `ini::ParseError`.
    #[error("Properties parsing error: {0}")]
    Properties(#[from] ini::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_parse_with_hint() {
        let error = Error::ConfigParse {
            message: "base is missing".to_string(),
            hint: Some("Add 'base: 8' to the descriptor".to_string()),
        };
        let display = error.to_string();
        assert!(display.contains("Configuration parsing error: base is missing"));
        assert!(display.contains("hint: Add 'base: 8'"));
    }

    #[test]
    fn test_error_display_version_parse() {
        let error = Error::VersionParse {
            value: "X64".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not determine java version from 'X64'"
        );
    }

    #[test]
    fn test_error_display_target_not_above_base() {
        let error = Error::TargetNotAboveBase {
            release: JavaVersion::new(8),
            base: JavaVersion::new(8),
        };
        assert!(error.to_string().contains("Cannot build version 8"));
        assert!(error.to_string().contains("base version (8)"));
    }

    #[test]
    fn test_error_display_no_toolchain() {
        let error = Error::NoToolchain {
            requested: JavaVersion::new(11),
            running: JavaVersion::new(17),
            mode: "strict",
            available: "8".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains(">= 11"));
        assert!(display.contains("strict mode"));
        assert!(display.contains("installed: 8"));
    }
}
