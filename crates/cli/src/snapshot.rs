// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot ingestion.
//!
//! Snapshots are JSONL files exported from the tracker by the
//! surrounding tooling: one JSON issue per line, blank lines ignored.
//! This is the only place issue data enters the program; the analysis
//! engine never performs I/O.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bussola_core::Issue;

use crate::error::{Error, Result};

/// Read issues from a JSONL snapshot. A source of `-` reads stdin.
pub fn read(source: &str) -> Result<Vec<Issue>> {
    if source == "-" {
        return read_from(std::io::stdin().lock());
    }
    let path = Path::new(source);
    if !path.is_file() {
        return Err(Error::SnapshotNotFound(source.to_string()));
    }
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Decode issues line by line, reporting the first malformed line.
pub(crate) fn read_from<R: BufRead>(reader: R) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let issue: Issue = serde_json::from_str(&line).map_err(|e| Error::SnapshotLine {
            line: index + 1,
            reason: e.to_string(),
        })?;
        issues.push(issue);
    }
    Ok(issues)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
