// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bussola - concentration and Pareto reports over issue-tracker snapshots.
//!
//! This crate provides the CLI adapters around [`bussola_core`]: snapshot
//! ingestion (JSONL), configuration, and text/JSON rendering of the four
//! report shapes (bug map, coverage map, panorama, Pareto volume).
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap surface
//! - [`config`] - `.bussola/config.toml` discovery and overrides
//! - [`snapshot`] - JSONL snapshot reader
//! - [`display`] - text renderers for the report shapes
//! - [`Error`] - error types for all operations
//!
//! All tracker interaction (fetching, authentication, retries) lives in
//! the external tooling that produces the snapshots; this binary only
//! analyzes them.

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod timings;

pub mod config;
pub mod error;
pub mod snapshot;

pub use cli::{Cli, Command, OutputFormat, SnapshotArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { project, path } => commands::init::run(project.as_deref(), path.as_deref()),
        Command::BugMap { snapshot, output } => {
            commands::bug_map::run(snapshot.input.as_deref(), output)
        }
        Command::CoverageMap { snapshot, output } => {
            commands::coverage_map::run(snapshot.input.as_deref(), output)
        }
        Command::Panorama {
            snapshot,
            top,
            output,
        } => commands::panorama::run(snapshot.input.as_deref(), top, output),
        Command::Pareto {
            kind,
            snapshot,
            output,
        } => commands::pareto::run(kind, snapshot.input.as_deref(), output),
        Command::Classify {
            kind,
            snapshot,
            output,
        } => commands::classify::run(kind, snapshot.input.as_deref(), output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "bussola", &mut std::io::stdout());
            Ok(())
        }
    }
}
