//! Detection of the Java runtime the planner treats as "currently running".
//!
//! The version is an explicit input everywhere else. This module is only
//! consulted by the CLI when `--running-version` isn't given: it asks
//! `$JAVA_HOME/bin/java` (or `java` on `PATH`) for its version.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};
use crate::settings::Environment;
use crate::version::JavaVersion;

const VERSION_PATTERN: &str = r#"(?m)version\s+"([^"]+)"|^(?:openjdk|java)\s+(\d[^\s]*)"#;

/// Probe the default `java` executable for its version.
pub fn detect(environment: &Environment) -> Result<JavaVersion> {
    let mut failures = Vec::new();

    for candidate in java_candidates(environment) {
        match probe(&candidate) {
            Ok(version) => {
                debug!("running Java {} ({})", version, candidate.display());
                return Ok(version);
            }
            Err(e) => failures.push(format!("{}: {}", candidate.display(), e)),
        }
    }

    Err(Error::RuntimeDetection {
        message: failures.join("; "),
    })
}

fn java_candidates(environment: &Environment) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = environment.get("JAVA_HOME").filter(|h| !h.is_empty()) {
        let exe = if cfg!(windows) { "java.exe" } else { "java" };
        candidates.push(PathBuf::from(home).join("bin").join(exe));
    }
    candidates.push(PathBuf::from("java"));
    candidates
}

fn probe(java: &Path) -> Result<JavaVersion> {
    let output = Command::new(java).arg("-version").output()?;

    // java -version reports on stderr; some wrappers use stdout
    let mut text = String::from_utf8_lossy(&output.stderr).to_string();
    if text.trim().is_empty() {
        text = String::from_utf8_lossy(&output.stdout).to_string();
    }
    parse_version_output(&text)
}

/// Extract the Java version from `java -version` output.
pub fn parse_version_output(output: &str) -> Result<JavaVersion> {
    let pattern = Regex::new(VERSION_PATTERN).map_err(|e| Error::RuntimeDetection {
        message: e.to_string(),
    })?;

    let token = pattern
        .captures(output)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::RuntimeDetection {
            message: format!(
                "no version in output '{}'",
                output.lines().next().unwrap_or_default()
            ),
        })?;

    JavaVersion::parse(token)
}
