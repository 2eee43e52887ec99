// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use bussola_core::IssueKind;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::SnapshotArgs;

/// Parse an issue-kind argument, forwarding the core hint on failure.
fn parse_kind(s: &str) -> Result<IssueKind, String> {
    s.parse::<IssueKind>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "bussola")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Concentration and Pareto reports over issue-tracker snapshots")]
#[command(
    long_about = "Concentration and Pareto reports over issue-tracker snapshots.\n\n\
    Reads bugs and test cases exported as JSONL, classifies their prefix-encoded\n\
    labels, and reports where problems and coverage concentrate."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────
    /// Map bug concentration by functional area/endpoint
    #[command(name = "bug-map", after_help = colors::examples("\
Examples:
  bussola bug-map                       Use the snapshot from config
  bussola bug-map -i issues.jsonl       Read a snapshot file
  bussola bug-map -i - < issues.jsonl   Read the snapshot from stdin
  bussola bug-map -o json               Emit the report as JSON"))]
    BugMap {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Map test coverage by functional area/endpoint
    #[command(name = "coverage-map", after_help = colors::examples("\
Examples:
  bussola coverage-map -i issues.jsonl  Group test cases by endpoint
  bussola coverage-map -o json          Emit the report as JSON"))]
    CoverageMap {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the project panorama (highlights + totals)
    #[command(after_help = colors::examples("\
Examples:
  bussola panorama -i issues.jsonl      Highlights and per-status totals
  bussola panorama --top 10             Widen the highlight sections"))]
    Panorama {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Number of items in each highlight section
        #[arg(long, default_value_t = bussola_core::report::DEFAULT_TOP)]
        top: usize,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// 80/20 volume analysis of bugs or test cases
    #[command(after_help = colors::examples("\
Examples:
  bussola pareto bugs                   Which areas hold most of the bugs?
  bussola pareto tests                  Where is test coverage concentrated?
  bussola pareto bugs -o json           Emit the partition as JSON"))]
    Pareto {
        /// Population to analyze (bugs, tests)
        #[arg(value_parser = parse_kind)]
        kind: IssueKind,

        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues with their derived facets
    #[command(after_help = colors::examples("\
Examples:
  bussola classify -i issues.jsonl      Every issue with its derived facets
  bussola classify --kind bugs          Bugs only
  bussola classify -o json              Emit rows as JSON"))]
    Classify {
        /// Restrict to one kind (bugs, tests)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<IssueKind>,

        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize report configuration
    #[command(after_help = colors::examples("\
Examples:
  bussola init --project cin            Create .bussola/config.toml
  bussola init                          Initialize without a project key"))]
    Init {
        /// Tracker project key (display only)
        #[arg(long, short)]
        project: Option<String>,

        /// Directory to initialize (defaults to the current directory)
        #[arg(long, value_name = "path")]
        path: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
