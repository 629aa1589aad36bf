//! # Output Configuration
//!
//! Controls how the CLI renders plans: colors and emoji markers based on
//! terminal capabilities and user preferences, plus the machine-readable
//! formats.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Detection reads from an [`Environment`] snapshot rather than the process,
//! so the same rules can be checked in tests.

use clap::ValueEnum;
use console::Style;
use serde::Serialize;

use crate::error::Result;
use crate::settings::Environment;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment and the `--color` flag.
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(environment: &Environment, color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(environment),
        };

        Self { use_color }
    }

    fn detect_color_support(environment: &Environment) -> bool {
        if environment.get("NO_COLOR").is_some() {
            return false;
        }
        if environment.get("CLICOLOR") == Some("0") {
            return false;
        }
        if environment
            .get("CLICOLOR_FORCE")
            .is_some_and(|v| v != "0" && !v.is_empty())
        {
            return true;
        }
        if environment.get("TERM") == Some("dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Colors always on, regardless of the terminal.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Colors always off; the plain markers are used instead of emoji.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Style `text` as a heading when colors are on.
    pub fn heading(&self, text: &str) -> String {
        self.styled(Style::new().bold(), text)
    }

    /// Style `text` as secondary information when colors are on.
    pub fn dim(&self, text: &str) -> String {
        self.styled(Style::new().dim(), text)
    }

    fn styled(&self, style: Style, text: &str) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Returns the emoji when colors are enabled, the plain marker otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Rendering of a command's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable
    #[default]
    Text,
    Json,
    Yaml,
}

/// Serialize `value` as JSON or YAML.
///
/// Returns `None` for [`Format::Text`]; text output is command specific.
pub fn render<T: Serialize>(value: &T, format: Format) -> Result<Option<String>> {
    Ok(match format {
        Format::Text => None,
        Format::Json => Some(serde_json::to_string_pretty(value)?),
        Format::Yaml => Some(serde_yaml::to_string(value)?),
    })
}
