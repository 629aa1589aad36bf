//! # Target Graph
//!
//! Turns a base version plus a set of higher targets into the layered
//! compilation plan of a multi-release project.
//!
//! ## Two phases
//!
//! [`GraphBuilder`] only accumulates declarations; it has no way to read a
//! unit back. [`GraphBuilder::finalize`] consumes the builder, validates the
//! declarations, resolves a toolchain for every unit and returns an immutable
//! [`TargetGraph`]. A graph therefore can't be observed half-configured, and
//! nothing can be declared once it exists.
//!
//! ## Chains
//!
//! Units form two strictly linear chains, both sorted by release:
//!
//! ```text
//! main  <- java9      <- java10      <- java15
//! test  <- java9Test  <- java15Test
//! ```
//!
//! Every unit except the first depends on the unit right before it and sees
//! the lower releases transitively through that single link. Newer code may
//! use anything older, never the reverse. The first test unit additionally
//! requires the main chain output.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::matrix::{self, TestUnit};
use crate::target::{TargetType, TargetVersion};
use crate::toolchain::{Purpose, SelectedToolchain, ToolchainSelector};
use crate::version::JavaVersion;

/// Directory, relative to the project, that compiled classes are written to.
pub const CLASSES_DIR: &str = "build/classes/java";

/// The two source sets a target can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Main,
    Test,
}

impl Chain {
    pub fn name(self) -> &'static str {
        match self {
            Chain::Main => "main",
            Chain::Test => "test",
        }
    }

    /// Name of the unit compiling `release` in this chain.
    pub fn unit_name(self, release: JavaVersion, is_base: bool) -> String {
        match (self, is_base) {
            (_, true) => self.name().to_string(),
            (Chain::Main, false) => format!("java{}", release),
            (Chain::Test, false) => format!("java{}Test", release),
        }
    }

    /// Source directory of the unit compiling `release`.
    pub fn source_dir(self, release: JavaVersion, is_base: bool) -> PathBuf {
        let root = Path::new("src").join(self.name());
        if is_base {
            root.join("java")
        } else {
            root.join(format!("java{}", release))
        }
    }
}

/// Compiler settings derived from a target and its selected toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileOptions {
    pub source_compatibility: String,
    pub target_compatibility: String,
    /// `--release` value; only JDK 9+ compilers understand the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_flag: Option<u32>,
    /// JDK to fork javac from, when it is not the running one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork_home: Option<PathBuf>,
    /// Complete javac argument list.
    pub args: Vec<String>,
}

impl CompileOptions {
    pub fn derive(target: &TargetVersion, toolchain: &SelectedToolchain) -> Self {
        let compatibility = target.release().compatibility();
        let release_flag = toolchain
            .version
            .is_java9_compatible()
            .then(|| target.release().major());

        let mut args = match release_flag {
            Some(release) => vec!["--release".to_string(), release.to_string()],
            None => vec![
                "-source".to_string(),
                compatibility.clone(),
                "-target".to_string(),
                compatibility.clone(),
            ],
        };
        args.extend(target.post_configure().compiler_args.iter().cloned());

        Self {
            source_compatibility: compatibility.clone(),
            target_compatibility: compatibility,
            release_flag,
            fork_home: toolchain.home.clone(),
            args,
        }
    }
}

/// One compiler invocation of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationUnit {
    pub name: String,
    pub chain: Chain,
    pub release: JavaVersion,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// The unit whose output this one compiles against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    pub toolchain: SelectedToolchain,
    pub options: CompileOptions,
}

/// Accumulates target declarations before a graph is finalized.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    base: Option<TargetVersion>,
    main_targets: Vec<TargetVersion>,
    test_targets: Vec<TargetVersion>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base version shared by the main and test source sets.
    ///
    /// Fails when a target that would no longer exceed the new base has
    /// already been declared.
    pub fn base_version(&mut self, base: TargetVersion) -> Result<&mut Self> {
        if let Some(target) = self
            .main_targets
            .iter()
            .find(|t| t.release() <= base.release())
            .or_else(|| self.test_targets.iter().find(|t| t.release() < base.release()))
        {
            return Err(Error::BaseAboveTarget {
                base: base.release(),
                target: target.release(),
            });
        }
        self.base = Some(base);
        Ok(self)
    }

    /// Declare a target for the main source set, the test source set, or both.
    pub fn target_version(&mut self, target: TargetVersion, kind: TargetType) -> Result<&mut Self> {
        let base = self.base.as_ref().map(TargetVersion::release);
        if kind.main() {
            check_target(Chain::Main, &target, &self.main_targets, base)?;
        }
        if kind.test() {
            check_target(Chain::Test, &target, &self.test_targets, base)?;
        }

        if kind.main() {
            self.main_targets.push(target.clone());
        }
        if kind.test() {
            self.test_targets.push(target);
        }
        Ok(self)
    }

    /// Run every structural check `finalize` would, without resolving
    /// toolchains.
    pub fn validate(&self) -> Result<()> {
        let base = self.base.as_ref().ok_or(Error::MissingBaseVersion)?;
        for (chain, targets) in [
            (Chain::Main, &self.main_targets),
            (Chain::Test, &self.test_targets),
        ] {
            for (index, target) in targets.iter().enumerate() {
                check_target(chain, target, &targets[..index], Some(base.release()))?;
            }
        }
        Ok(())
    }

    /// Validate the declarations, resolve toolchains and freeze the graph.
    pub fn finalize(self, selector: &ToolchainSelector<'_>) -> Result<TargetGraph> {
        self.validate()?;
        let GraphBuilder {
            base,
            mut main_targets,
            mut test_targets,
        } = self;
        let base = base.ok_or(Error::MissingBaseVersion)?;
        let floor = base.toolchain();

        main_targets.sort_by_key(TargetVersion::release);
        test_targets.sort_by_key(TargetVersion::release);

        let mut main_layers = vec![base.clone()];
        main_layers.extend(main_targets);

        // A test target at the base release replaces the base for the
        // primary test unit.
        let (base_test, higher_tests): (Vec<_>, Vec<_>) = test_targets
            .into_iter()
            .partition(|t| t.release() == base.release());
        let mut test_layers = vec![base_test.into_iter().next().unwrap_or_else(|| base.clone())];
        test_layers.extend(higher_tests);

        let main = build_chain(Chain::Main, &main_layers, floor, selector)?;
        let test = build_chain(Chain::Test, &test_layers, floor, selector)?;
        let tests = matrix::build(&main, &test, &test_layers, selector)?;

        debug!(
            "finalized graph: {} main units, {} test units, {} test runs",
            main.len(),
            test.len(),
            tests.len()
        );

        Ok(TargetGraph {
            base: base.release(),
            floor,
            strict: selector.is_strict(),
            running: selector.running(),
            main,
            test,
            tests,
        })
    }
}

fn check_target(
    chain: Chain,
    target: &TargetVersion,
    declared: &[TargetVersion],
    base: Option<JavaVersion>,
) -> Result<()> {
    let release = target.release();
    if declared.iter().any(|t| t.release() == release) {
        return Err(Error::DuplicateTarget {
            release,
            chain: chain.name(),
        });
    }

    let Some(base) = base else {
        return Ok(());
    };
    let at_base_allowed = chain == Chain::Test && release == base;
    if release < base || (release == base && !at_base_allowed) {
        return Err(Error::TargetNotAboveBase { release, base });
    }
    if release > base && release < JavaVersion::MIN_LAYERED {
        return Err(Error::BelowLayeringMinimum {
            release,
            minimum: JavaVersion::MIN_LAYERED,
        });
    }
    Ok(())
}

fn build_chain(
    chain: Chain,
    layers: &[TargetVersion],
    floor: JavaVersion,
    selector: &ToolchainSelector<'_>,
) -> Result<Vec<CompilationUnit>> {
    let mut units: Vec<CompilationUnit> = Vec::with_capacity(layers.len());

    for (index, target) in layers.iter().enumerate() {
        let is_base = index == 0;
        let name = chain.unit_name(target.release(), is_base);
        let toolchain = selector.select(target.toolchain(), floor, Purpose::Compile)?;
        let options = CompileOptions::derive(target, &toolchain);

        units.push(CompilationUnit {
            output_dir: Path::new(CLASSES_DIR).join(&name),
            source_dir: chain.source_dir(target.release(), is_base),
            depends_on: units.last().map(|previous| previous.name.clone()),
            name,
            chain,
            release: target.release(),
            toolchain,
            options,
        });
    }

    Ok(units)
}

/// The finalized, immutable plan.
#[derive(Debug, Clone, Serialize)]
pub struct TargetGraph {
    base: JavaVersion,
    floor: JavaVersion,
    strict: bool,
    running: JavaVersion,
    main: Vec<CompilationUnit>,
    test: Vec<CompilationUnit>,
    tests: Vec<TestUnit>,
}

impl TargetGraph {
    pub fn base(&self) -> JavaVersion {
        self.base
    }

    /// Lowest JDK any unit is compiled with.
    pub fn floor(&self) -> JavaVersion {
        self.floor
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn running(&self) -> JavaVersion {
        self.running
    }

    /// Main chain, base unit first.
    pub fn main_units(&self) -> &[CompilationUnit] {
        &self.main
    }

    /// Test compilation chain, base unit first.
    pub fn test_units(&self) -> &[CompilationUnit] {
        &self.test
    }

    /// Test executions, primary unit first.
    pub fn test_matrix(&self) -> &[TestUnit] {
        &self.tests
    }

    pub fn unit(&self, name: &str) -> Option<&CompilationUnit> {
        self.main.iter().chain(&self.test).find(|unit| unit.name == name)
    }

    /// Releases that get their own layer in the main output.
    pub fn layered_releases(&self) -> BTreeSet<JavaVersion> {
        self.main.iter().skip(1).map(|unit| unit.release).collect()
    }

    /// Everything a unit compiles against, resolved through the chain.
    ///
    /// Nearest dependency first. Test units also see the main outputs up to
    /// their own release.
    pub fn compile_classpath(&self, name: &str) -> Option<Vec<PathBuf>> {
        let unit = self.unit(name)?;
        let mut classpath = Vec::new();

        let mut next = unit.depends_on.as_deref();
        while let Some(dependency) = next.and_then(|dep| self.unit(dep)) {
            classpath.push(dependency.output_dir.clone());
            next = dependency.depends_on.as_deref();
        }

        if unit.chain == Chain::Test {
            classpath.extend(matrix::main_outputs_up_to(&self.main, unit.release));
        }
        Some(classpath)
    }
}
