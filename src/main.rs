//! # Multirelease CLI
//!
//! This is the binary entry point for the `multirelease` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Snapshotting the process environment once, so the library never reads it.
//! - Executing the appropriate command and reporting errors with hints.
//!
//! The planning logic lives in the `lib.rs` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
