//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks the
//! `.multirelease.yaml` descriptor without resolving any toolchain.
//!
//! ## Functionality
//!
//! - **Descriptor Parsing**: parses the descriptor and reports YAML and
//!   schema errors with hints.
//! - **Target Validation**: runs every structural check the planner does
//!   (duplicates, targets at or below the base, releases that can't be
//!   layered, compilers older than their release).
//! - **Toolchain Settings**: reports, as warnings, problems with the
//!   toolchain catalog and property keys that look misspelled.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use multirelease::config::{self, ProjectConfig};
use multirelease::output::{emoji, OutputConfig};
use multirelease::suggestions;

use crate::cli::Context;

/// Validate the project descriptor
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Treat warnings as errors.
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, context: &Context) -> Result<()> {
    let out = &context.output;
    let config_path = &context.project.config;
    println!(
        "{} Validating project descriptor: {}",
        emoji(out, "🔍", "[SCAN]"),
        config_path.display()
    );

    if !config_path.is_file() {
        return Err(suggestions::config_not_found(config_path));
    }

    let project = match config::from_file(config_path) {
        Ok(project) => {
            println!("{} Descriptor parsed successfully", emoji(out, "✅", "[OK]"));
            project
        }
        Err(e) => {
            println!("{} Descriptor parsing failed", emoji(out, "❌", "[ERR]"));
            return Err(suggestions::explain(e));
        }
    };

    print_summary(&project, out);

    println!("\n{} Checking targets...", emoji(out, "🔄", "[CHECK]"));
    if let Err(e) = project.to_builder().and_then(|builder| builder.validate()) {
        println!("{} {}", emoji(out, "❌", "[ERR]"), e);
        return Err(suggestions::explain(e));
    }
    println!("{} All targets are valid", emoji(out, "✅", "[OK]"));

    println!("\n{} Checking toolchain settings...", emoji(out, "🔄", "[CHECK]"));
    let warnings = match context.project.load(&context.environment) {
        Ok(loaded) => {
            println!(
                "   Toolchains found: {} ({})",
                loaded.catalog().len(),
                loaded.catalog().describe_versions()
            );
            println!(
                "   Selection policy: {}",
                if loaded.is_strict() { "strict" } else { "lenient" }
            );
            loaded
                .sources()
                .properties
                .iter()
                .filter_map(|(key, _)| {
                    suggestions::misspelled_property(key)
                        .map(|intended| format!("property '{}' is not used; did you mean '{}'?", key, intended))
                })
                .collect::<Vec<_>>()
        }
        Err(e) => vec![e.to_string()],
    };

    for warning in &warnings {
        println!("{} {}", emoji(out, "⚠️", "[WARN]"), warning);
    }

    if warnings.is_empty() {
        println!("\n{} Validation passed", emoji(out, "✅", "[OK]"));
        Ok(())
    } else if args.deny_warnings {
        Err(anyhow::anyhow!(
            "Validation failed with {} warning(s)",
            warnings.len()
        ))
    } else {
        println!(
            "\n{} Validation passed with {} warning(s)",
            emoji(out, "✅", "[OK]"),
            warnings.len()
        );
        Ok(())
    }
}

fn print_summary(project: &ProjectConfig, out: &OutputConfig) {
    let main = project.targets.iter().filter(|t| t.kind.main()).count();
    let test = project.targets.iter().filter(|t| t.kind.test()).count();

    println!("\n{} Descriptor Summary:", emoji(out, "📊", "[INFO]"));
    println!("   Base release: Java {}", project.base_release());
    println!("   Main targets: {}", main);
    println!("   Test targets: {}", test);
    if let Some(strict) = project.strict_versions {
        println!("   strict-versions: {}", strict);
    }
}
