// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument groups for report commands.

use clap::Args;

/// Snapshot source shared by every report command.
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot file (JSONL, one issue per line); "-" reads stdin
    #[arg(long, short = 'i', value_name = "path")]
    pub input: Option<String>,
}
