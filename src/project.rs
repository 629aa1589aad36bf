//! # Project Loading
//!
//! Gathers everything a plan is computed from: the descriptor, the layered
//! settings and the environment snapshot. The steps run in a fixed order:
//!
//! 1.  **Descriptor**: parse `.multirelease.yaml` into a [`ProjectConfig`].
//! 2.  **Settings**: layer the project properties file, the user-level file
//!     and `-P` overrides into one [`Properties`].
//! 3.  **Catalog**: build the [`ToolchainCatalog`] from the environment and
//!     the merged properties.
//! 4.  **Policy**: resolve strict versus lenient selection.
//!
//! Planning itself (builder, selector, finalize) happens in [`Project::plan`]
//! once a running version is known.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::catalog::ToolchainCatalog;
use crate::config::{self, ProjectConfig};
use crate::defaults::PROPERTIES_FILE;
use crate::error::Result;
use crate::graph::TargetGraph;
use crate::settings::{self, Environment, Properties};
use crate::toolchain::ToolchainSelector;
use crate::version::JavaVersion;

/// The two key/value inputs the catalog and strict flag are read from.
#[derive(Debug, Clone, Default)]
pub struct ToolchainSources {
    pub environment: Environment,
    pub properties: Properties,
}

impl ToolchainSources {
    pub fn new(environment: Environment, properties: Properties) -> Self {
        Self {
            environment,
            properties,
        }
    }

    pub fn catalog(&self, project_dir: &Path) -> Result<ToolchainCatalog> {
        ToolchainCatalog::build(
            self.environment.iter(),
            self.properties.iter(),
            project_dir,
        )
    }
}

/// Settings layered on top of the project's own properties file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// User-level properties file; skipped when absent.
    pub user_properties: Option<PathBuf>,
    /// `-P` overrides, applied last.
    pub overrides: Vec<(String, String)>,
    /// `--strict` / `--lenient`.
    pub strict: Option<bool>,
}

/// A loaded project, ready to be planned against a running version.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
    sources: ToolchainSources,
    catalog: ToolchainCatalog,
    strict: bool,
}

impl Project {
    /// Load the descriptor at `config_path` and the settings around it.
    pub fn load(config_path: &Path, environment: Environment, options: &LoadOptions) -> Result<Self> {
        info!("loading project descriptor {}", config_path.display());
        let config = config::from_file(config_path)?;
        let root = project_root(config_path);

        let mut properties = Properties::load_optional(&root.join(PROPERTIES_FILE))?;
        if let Some(user) = &options.user_properties {
            properties.extend(Properties::load_optional(user)?);
        }
        for (key, value) in &options.overrides {
            properties.set(key.clone(), value.clone());
        }
        debug!("{} properties after layering", properties.len());

        Self::new(
            root,
            config,
            ToolchainSources::new(environment, properties),
            options.strict,
        )
    }

    /// Assemble a project from already loaded parts.
    ///
    /// `strict` overrides the descriptor's `strict-versions`, which in turn
    /// overrides the property and `CI` flag.
    pub fn new(
        root: PathBuf,
        config: ProjectConfig,
        sources: ToolchainSources,
        strict: Option<bool>,
    ) -> Result<Self> {
        let catalog = sources.catalog(&root)?;
        let strict = settings::resolve_strict(
            strict.or(config.strict_versions),
            &sources.properties,
            &sources.environment,
        );
        debug!(
            "{} toolchains cataloged, strict selection {}",
            catalog.len(),
            if strict { "on" } else { "off" }
        );

        Ok(Self {
            root,
            config,
            sources,
            catalog,
            strict,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn sources(&self) -> &ToolchainSources {
        &self.sources
    }

    pub fn catalog(&self) -> &ToolchainCatalog {
        &self.catalog
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn selector(&self, running: JavaVersion) -> ToolchainSelector<'_> {
        ToolchainSelector::new(&self.catalog, running, self.strict)
    }

    /// Check the declarations without resolving any toolchain.
    pub fn validate(&self) -> Result<()> {
        self.config.to_builder()?.validate()
    }

    /// Build the complete plan for a JVM of version `running`.
    pub fn plan(&self, running: JavaVersion) -> Result<TargetGraph> {
        let builder = self.config.to_builder()?;
        builder.finalize(&self.selector(running))
    }
}

/// Directory containing the descriptor; `.` for a bare file name.
fn project_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
