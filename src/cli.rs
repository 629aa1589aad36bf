//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::{warn, LevelFilter};

use multirelease::defaults::{self, DEFAULT_CONFIG_FILE};
use multirelease::output::OutputConfig;
use multirelease::project::{LoadOptions, Project};
use multirelease::settings::{self, Environment};
use multirelease::version::JavaVersion;
use multirelease::{runtime, suggestions};

use crate::commands;

/// Multirelease - Plan layered multi-release Java builds and pick their toolchains
#[derive(Parser, Debug)]
#[command(name = "multirelease")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,

    #[command(flatten)]
    project: ProjectArgs,
}

/// Options shared by every command that reads a project.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Path to the .multirelease.yaml project descriptor.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "MULTIRELEASE_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Set a property, e.g. -PjavaHome.11=/opt/jdk11. Overrides properties files.
    #[arg(
        short = 'P',
        long = "property",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = settings::parse_override
    )]
    pub properties: Vec<(String, String)>,

    /// User-level properties file.
    ///
    /// Defaults to `multirelease/multirelease.properties` in the platform
    /// configuration directory (e.g. `~/.config` on Linux).
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "MULTIRELEASE_USER_PROPERTIES"
    )]
    pub user_properties: Option<PathBuf>,

    /// Only use installed toolchains that match each target.
    #[arg(long, global = true, conflicts_with = "lenient")]
    pub strict: bool,

    /// Use the running JDK whenever it is new enough.
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Version of the running JDK; probed with `java -version` when omitted.
    #[arg(
        long,
        global = true,
        value_name = "VERSION",
        env = "MULTIRELEASE_RUNNING_VERSION"
    )]
    pub running_version: Option<JavaVersion>,
}

impl ProjectArgs {
    /// `--strict` / `--lenient`, if either was given.
    pub fn strict_override(&self) -> Option<bool> {
        if self.strict {
            Some(true)
        } else if self.lenient {
            Some(false)
        } else {
            None
        }
    }

    /// Load the descriptor and its settings layers.
    pub fn load(&self, environment: &Environment) -> Result<Project> {
        if !self.config.is_file() {
            return Err(suggestions::config_not_found(&self.config));
        }

        let options = LoadOptions {
            user_properties: self
                .user_properties
                .clone()
                .or_else(defaults::user_properties_path),
            overrides: self.properties.clone(),
            strict: self.strict_override(),
        };
        let project = Project::load(&self.config, environment.clone(), &options)
            .map_err(suggestions::explain)?;

        for (key, _) in project.sources().properties.iter() {
            if let Some(intended) = suggestions::misspelled_property(key) {
                warn!("property '{}' is not used; did you mean '{}'?", key, intended);
            }
        }
        Ok(project)
    }

    /// The explicit running version, or the probed one.
    pub fn running_version(&self, environment: &Environment) -> Result<JavaVersion> {
        match self.running_version {
            Some(version) => Ok(version),
            None => runtime::detect(environment).map_err(suggestions::explain),
        }
    }
}

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub environment: Environment,
    pub output: OutputConfig,
    pub project: ProjectArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the compilation and test plan for the project
    Plan(commands::plan::PlanArgs),

    /// List the installed toolchains that were found
    Toolchains(commands::toolchains::ToolchainsArgs),

    /// Show which toolchain would be used for one version
    Select(commands::select::SelectArgs),

    /// Validate the project descriptor without resolving toolchains
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let environment = Environment::from_process();
        let context = Context {
            output: OutputConfig::from_env_and_flag(&environment, &self.color),
            environment,
            project: self.project,
        };

        match self.command {
            Commands::Plan(args) => commands::plan::execute(args, &context),
            Commands::Toolchains(args) => commands::toolchains::execute(args, &context),
            Commands::Select(args) => commands::select::execute(args, &context),
            Commands::Validate(args) => commands::validate::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(LevelFilter::Warn);
    // a second init only happens in tests; keep the first logger
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
