//! Default values for multirelease configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Project descriptor looked up when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = ".multirelease.yaml";

/// Settings file read from the project directory and the user directory.
pub const PROPERTIES_FILE: &str = "multirelease.properties";

/// Returns the default user-level properties file.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/multirelease/multirelease.properties`
/// - macOS: `~/Library/Application Support/multirelease/multirelease.properties`
/// - Windows: `{FOLDERID_RoamingAppData}\multirelease\multirelease.properties`
///
/// Returns `None` if the platform directory cannot be determined. This can
/// be overridden by the `--user-properties` CLI flag or the
/// `MULTIRELEASE_USER_PROPERTIES` environment variable.
pub fn user_properties_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("multirelease").join(PROPERTIES_FILE))
}
