//! # Test Matrix
//!
//! One test execution per test release, mirroring the test compilation chain.
//!
//! - The base release reuses the primary `test` run. Only its JVM changes; it
//!   always runs.
//! - Every higher release gets its own `testJava<N>` run. It is skipped unless
//!   strict mode is on or its release is newer than the running JDK, so local
//!   lenient builds don't start a JVM per already-covered version.
//!
//! Compilation resolves lower layers through a single link, but a test JVM
//! needs every ancestor's classes physically present. Each run therefore
//! carries the flattened union of its own test classes and those of all lower
//! releases, newest first so a layer shadows the ones below it.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::graph::CompilationUnit;
use crate::target::TargetVersion;
use crate::toolchain::{Purpose, SelectedToolchain, ToolchainSelector};
use crate::version::JavaVersion;

/// When a non-primary test run is worth executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunCondition {
    pub strict: bool,
    pub release: JavaVersion,
    pub running: JavaVersion,
}

impl RunCondition {
    pub fn should_run(&self) -> bool {
        self.strict || self.release > self.running
    }
}

/// One test execution of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestUnit {
    pub name: String,
    pub release: JavaVersion,
    /// Whether this is the project's ordinary `test` run.
    pub primary: bool,
    pub toolchain: SelectedToolchain,
    pub test_classes: Vec<PathBuf>,
    pub classpath: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_unless: Option<RunCondition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jvm_args: Vec<String>,
}

impl TestUnit {
    pub fn should_run(&self) -> bool {
        self.skip_unless
            .as_ref()
            .map_or(true, RunCondition::should_run)
    }
}

/// Outputs of the main chain a runtime of `release` would load, newest first.
pub(crate) fn main_outputs_up_to(main: &[CompilationUnit], release: JavaVersion) -> Vec<PathBuf> {
    main.iter()
        .rev()
        .filter(|unit| unit.release <= release)
        .map(|unit| unit.output_dir.clone())
        .collect()
}

/// Build the test runs for a finalized test chain.
///
/// `layers` are the test targets in chain order, aligned with `test_chain`.
pub(crate) fn build(
    main: &[CompilationUnit],
    test_chain: &[CompilationUnit],
    layers: &[TargetVersion],
    selector: &ToolchainSelector<'_>,
) -> Result<Vec<TestUnit>> {
    let mut units = Vec::with_capacity(test_chain.len());

    for (index, (compiled, target)) in test_chain.iter().zip(layers).enumerate() {
        let primary = index == 0;
        // tests exercise the release's own runtime, not the compiler
        let toolchain = selector.select(target.release(), target.release(), Purpose::Execute)?;

        let test_classes: Vec<PathBuf> = test_chain[..=index]
            .iter()
            .rev()
            .map(|unit| unit.output_dir.clone())
            .collect();
        let mut classpath = test_classes.clone();
        classpath.extend(main_outputs_up_to(main, compiled.release));

        let (name, skip_unless) = if primary {
            (compiled.name.clone(), None)
        } else {
            (
                format!("testJava{}", compiled.release),
                Some(RunCondition {
                    strict: selector.is_strict(),
                    release: compiled.release,
                    running: selector.running(),
                }),
            )
        };

        units.push(TestUnit {
            name,
            release: compiled.release,
            primary,
            toolchain,
            test_classes,
            classpath,
            skip_unless,
            jvm_args: target.post_configure().jvm_args.clone(),
        });
    }

    Ok(units)
}
