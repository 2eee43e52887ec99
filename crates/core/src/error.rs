// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for bussola-core operations.
//!
//! The analysis engine itself is total: malformed labels and unknown
//! statuses degrade to sentinel values instead of failing. Errors exist
//! only at the typed-string edges of the API.

use thiserror::Error;

/// All possible errors that can occur in bussola-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue kind: '{0}'\n  hint: valid kinds are: bug, test_case")]
    InvalidIssueKind(String),
}

/// A specialized Result type for bussola-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
