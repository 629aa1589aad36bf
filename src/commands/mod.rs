//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `multirelease` command-line tool, one file per subcommand.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`Context`](crate::cli::Context) and performs the command's logic.
//!
//! Project-level options (descriptor path, properties, strictness, running
//! version) are global flags and live on the context.

pub mod completions;
pub mod plan;
pub mod select;
pub mod toolchains;
pub mod validate;
