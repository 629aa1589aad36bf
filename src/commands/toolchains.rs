//! # Toolchains Command Implementation
//!
//! This module implements the `toolchains` subcommand, which lists the
//! installed JDKs the planner found, after environment variables and every
//! properties layer have been merged.

use anyhow::Result;
use clap::Args;

use multirelease::catalog::{EntrySource, ToolchainCatalog};
use multirelease::output::{self, emoji, Format, OutputConfig};

use crate::cli::Context;

/// List the installed toolchains that were found
#[derive(Args, Debug)]
pub struct ToolchainsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Execute the `toolchains` command.
pub fn execute(args: ToolchainsArgs, context: &Context) -> Result<()> {
    let project = context.project.load(&context.environment)?;
    let catalog = project.catalog();

    let entries: Vec<_> = catalog.entries().collect();
    match output::render(&entries, args.format)? {
        Some(rendered) => print!("{}", rendered),
        None => print!("{}", describe(catalog, &context.output)),
    }
    Ok(())
}

fn describe(catalog: &ToolchainCatalog, out: &OutputConfig) -> String {
    if catalog.is_empty() {
        return format!(
            "{} No toolchains found; set JAVA_HOME_<version>_<arch> or javaHome.<version>\n",
            emoji(out, "⚠️", "[WARN]")
        );
    }

    let mut text = format!(
        "{} {} toolchain{} found\n",
        emoji(out, "☕", "[INFO]"),
        catalog.len(),
        if catalog.len() == 1 { "" } else { "s" }
    );
    for entry in catalog.entries() {
        let source = match entry.source {
            EntrySource::Environment => "environment",
            EntrySource::Property => "property",
        };
        text.push_str(&format!(
            "   Java {:<4} {}  {}\n",
            entry.version,
            entry.path.display(),
            out.dim(&format!("({})", source))
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_describe_lists_entries_in_order() {
        let catalog = ToolchainCatalog::build(
            [("JAVA_HOME_17_X64", "/opt/jdk17")],
            [("javaHome.8", "/opt/jdk8")],
            Path::new("/project"),
        )
        .unwrap();
        let text = describe(&catalog, &OutputConfig::without_color());

        assert!(text.starts_with("[INFO] 2 toolchains found"));
        let java8 = text.find("Java 8").unwrap();
        let java17 = text.find("Java 17").unwrap();
        assert!(java8 < java17);
        assert!(text.contains("/opt/jdk8  (property)"));
        assert!(text.contains("/opt/jdk17  (environment)"));
    }

    #[test]
    fn test_describe_empty_catalog() {
        let text = describe(&ToolchainCatalog::default(), &OutputConfig::without_color());
        assert!(text.contains("[WARN] No toolchains found"));
    }
}
