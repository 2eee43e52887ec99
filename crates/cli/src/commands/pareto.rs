// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bussola_core::{report, Issue, IssueKind};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::timings;

pub fn run(kind: IssueKind, input: Option<&str>, format: OutputFormat) -> Result<()> {
    let (_, issues) = super::load(input)?;
    run_impl(kind, issues, format)
}

/// Internal implementation that accepts preloaded issues for testing.
///
/// Volume counts every status, so no resolved set is involved.
pub(crate) fn run_impl(kind: IssueKind, issues: Vec<Issue>, format: OutputFormat) -> Result<()> {
    let volume = timings::phase("report::volume", || report::volume(issues, kind));

    match format {
        OutputFormat::Text => println!("{}", display::render_volume(&volume)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&volume)?),
    }

    Ok(())
}

#[cfg(test)]
#[path = "pareto_tests.rs"]
mod tests;
