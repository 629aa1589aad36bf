//! # Select Command Implementation
//!
//! This module implements the `select` subcommand, which shows a single
//! toolchain decision: the JDK that would compile (or, with `--execute`,
//! run) code for one Java version under the project's policy.
//!
//! Compilation requests are raised to the project floor, the base target's
//! compiler version, unless `--floor` gives another one.

use anyhow::Result;
use clap::Args;

use multirelease::output::{self, emoji, Format, OutputConfig};
use multirelease::suggestions;
use multirelease::toolchain::{Purpose, SelectedToolchain};
use multirelease::version::JavaVersion;

use crate::cli::Context;

/// Show which toolchain would be used for one version
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Requested Java version, e.g. 11 or 1.8.
    pub version: JavaVersion,

    /// Select a runtime for executing tests instead of a compiler.
    #[arg(long)]
    pub execute: bool,

    /// Lowest version allowed for compilation; defaults to the base target's compiler.
    #[arg(long, value_name = "VERSION")]
    pub floor: Option<JavaVersion>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Execute the `select` command.
pub fn execute(args: SelectArgs, context: &Context) -> Result<()> {
    let project = context.project.load(&context.environment)?;
    let running = context.project.running_version(&context.environment)?;

    let floor = match args.floor {
        Some(floor) => floor,
        None => project
            .config()
            .base
            .to_target()
            .map_err(suggestions::explain)?
            .toolchain(),
    };
    let purpose = if args.execute {
        Purpose::Execute
    } else {
        Purpose::Compile
    };

    let selected = project
        .selector(running)
        .select(args.version, floor, purpose)
        .map_err(suggestions::explain)?;

    match output::render(&selected, args.format)? {
        Some(rendered) => print!("{}", rendered),
        None => {
            println!(
                "{}",
                describe(args.version, purpose, &selected, &context.output)
            );
            let tool = match purpose {
                Purpose::Compile => "javac",
                Purpose::Execute => "java",
            };
            if let Some(executable) = selected.executable(tool) {
                println!("   {}", context.output.dim(&executable.display().to_string()));
            }
        }
    }
    Ok(())
}

fn describe(
    requested: JavaVersion,
    purpose: Purpose,
    selected: &SelectedToolchain,
    out: &OutputConfig,
) -> String {
    let verb = match purpose {
        Purpose::Compile => "compile",
        Purpose::Execute => "run",
    };
    let toolchain = match &selected.home {
        Some(home) => format!("JDK {} at {}", selected.version, home.display()),
        None => format!("the running JDK {}", selected.version),
    };
    format!(
        "{} Java {} code would {} with {}",
        emoji(out, "☕", "[SELECT]"),
        requested,
        verb,
        toolchain
    )
}
