//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use multirelease::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Configuration file not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

use crate::catalog::PROPERTY_PREFIX;
use crate::error::Error;
use crate::settings::STRICT_PROPERTY;

/// Generate an error for when the project descriptor is not found.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Project descriptor not found: {path}\n\n\
         hint: Create a .multirelease.yaml file declaring at least 'base: <version>'\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set MULTIRELEASE_CONFIG environment variable",
        path = path.display()
    )
}

/// Attach hints to a library error before it reaches the user.
pub fn explain(error: Error) -> anyhow::Error {
    let hints = match &error {
        Error::NoToolchain {
            requested, mode, ..
        } => {
            let mut hints = vec![
                format!(
                    "Install Java {requested} and set JAVA_HOME_{requested}_X64, or pass -P{PROPERTY_PREFIX}{requested}=<path>"
                ),
                "Run 'multirelease toolchains' to list the toolchains that were found".to_string(),
            ];
            if *mode == "strict" {
                hints.push(
                    "Use --lenient to build with the running JDK when it is new enough".to_string(),
                );
            }
            hints
        }
        Error::RuntimeDetection { .. } => vec![
            "Pass --running-version <VERSION> or set MULTIRELEASE_RUNNING_VERSION".to_string(),
            "Point JAVA_HOME at a JDK, or put 'java' on PATH".to_string(),
        ],
        Error::VersionParse { .. } => vec![
            "Versions look like 8, 1.8, 11 or 17.0.2".to_string(),
            format!("Check JAVA_HOME_<version>_<arch> variables and {PROPERTY_PREFIX}<version> keys"),
        ],
        Error::DuplicateToolchain { version, .. } => vec![format!(
            "Remove one of the entries, or pick one explicitly with -P{PROPERTY_PREFIX}{version}=<path>"
        )],
        Error::DuplicateTarget { .. }
        | Error::TargetNotAboveBase { .. }
        | Error::BelowLayeringMinimum { .. }
        | Error::BaseAboveTarget { .. }
        | Error::IncompatibleToolchain { .. }
        | Error::MissingBaseVersion => {
            vec!["Run 'multirelease validate' to check the descriptor".to_string()]
        }
        _ => Vec::new(),
    };

    if hints.is_empty() {
        return anyhow::Error::new(error);
    }
    let hints = hints
        .iter()
        .map(|hint| format!("hint: {hint}"))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::anyhow!("{error}\n\n{hints}")
}

/// Suggest the intended key for a property that looks like a typo of one
/// the planner reads.
///
/// Returns `None` for recognized keys and for keys that aren't close to any.
pub fn misspelled_property(key: &str) -> Option<String> {
    if key.starts_with(PROPERTY_PREFIX) || key == STRICT_PROPERTY {
        return None;
    }

    let java_home = PROPERTY_PREFIX.trim_end_matches('.');
    let (head, rest) = key.split_once('.').unwrap_or((key, ""));
    if find_similar(head, &[java_home]).is_some() {
        let version = if rest.is_empty() { "<version>" } else { rest };
        return Some(format!("{PROPERTY_PREFIX}{version}"));
    }

    find_similar(key, &[STRICT_PROPERTY]).map(str::to_string)
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance, ignoring ASCII case.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().map(|c| c.to_ascii_lowercase()).collect();
    let b: Vec<char> = b.chars().map(|c| c.to_ascii_lowercase()).collect();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }
    previous[b.len()]
}
