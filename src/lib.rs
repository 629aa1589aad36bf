//! # Multi-Release Planning Library
//!
//! This library plans the compilation and testing of a multi-release Java
//! artifact: one artifact carrying several bytecode versions, where a JVM
//! picks the newest layer it can run. It is designed to be used by the
//! `multirelease` command-line tool, which prints the plan for an external
//! build to execute, but every step is exposed as a plain library API.
//!
//! ## Quick Example
//!
//! ```
//! use multirelease::catalog::ToolchainCatalog;
//! use multirelease::config;
//! use multirelease::toolchain::ToolchainSelector;
//! use multirelease::version::JavaVersion;
//!
//! let project = config::parse("base: 8\ntargets:\n  - release: 11\n").unwrap();
//! let catalog = ToolchainCatalog::from_paths([(JavaVersion::new(8), "/opt/jdk8")]);
//! let selector = ToolchainSelector::new(&catalog, JavaVersion::new(17), false);
//!
//! let graph = project.to_builder().unwrap().finalize(&selector).unwrap();
//! let names: Vec<_> = graph.main_units().iter().map(|u| u.name.as_str()).collect();
//! assert_eq!(names, ["main", "java11"]);
//! assert_eq!(graph.test_matrix().len(), 2);
//! ```
//!
//! ## Core Concepts
//!
//! - **Versions (`version`)**: Java version identifiers, parsed the way
//!   Gradle parses them (`1.8` and `8` are the same release).
//! - **Catalog (`catalog`)**: installed JDKs discovered from
//!   `JAVA_HOME_<version>_<arch>` variables and `javaHome.<version>` settings.
//! - **Selection (`toolchain`)**: which JDK compiles or runs a given release,
//!   under a strict or lenient policy.
//! - **Graph (`graph`)**: the linear chains of compilation units, one per
//!   release, each compiled against the one before it.
//! - **Test matrix (`matrix`)**: one test run per test release, with the
//!   flattened classes of every lower release.
//!
//! ## Execution Flow
//!
//! The CLI goes through [`project::Project`]:
//!
//! 1.  **Load**: parse the descriptor and layer the properties files.
//! 2.  **Catalog**: collect installed toolchains from the environment
//!     snapshot and the properties.
//! 3.  **Policy**: resolve strict mode from flags, properties and `CI`.
//! 4.  **Plan**: declare targets on a [`graph::GraphBuilder`] and finalize it
//!     against a [`toolchain::ToolchainSelector`] for the running JDK.

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod output;
pub mod project;
pub mod runtime;
pub mod settings;
pub mod suggestions;
pub mod target;
pub mod toolchain;
pub mod version;

#[cfg(test)]
mod graph_proptest;
