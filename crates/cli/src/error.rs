// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the bussola CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
/// The analysis engine itself never fails on malformed labels; every
/// error here comes from the adapter layer (input, config, rendering).
#[derive(Debug, Error)]
pub enum Error {
    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no snapshot input\n  hint: pass --input <path> ('-' for stdin) or set 'snapshot' in .bussola/config.toml")]
    NoInput,

    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("snapshot line {line}: {reason}")]
    SnapshotLine { line: usize, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] bussola_core::Error),
}

/// A specialized Result type for bussola CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
