// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod bug_map;
pub mod classify;
pub mod coverage_map;
pub mod init;
pub mod panorama;
pub mod pareto;

use bussola_core::Issue;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::snapshot;
use crate::timings;

/// Load the nearest configuration and the issues for a report run.
///
/// The snapshot source is the explicit `--input` when given, otherwise
/// the config's `snapshot` path resolved against the project root.
pub(crate) fn load(input: Option<&str>) -> Result<(Config, Vec<Issue>)> {
    let (root, config) = config::discover()?;

    let source = match input {
        Some(path) => path.to_string(),
        None => root
            .as_deref()
            .and_then(|r| config.snapshot_path(r))
            .map(|p| p.display().to_string())
            .ok_or(Error::NoInput)?,
    };

    let issues = timings::phase("snapshot::read", || snapshot::read(&source))?;
    Ok((config, issues))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
