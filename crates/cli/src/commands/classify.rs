// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bussola_core::{report, Issue, IssueKind};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::timings;

pub fn run(kind: Option<IssueKind>, input: Option<&str>, format: OutputFormat) -> Result<()> {
    let (_, issues) = super::load(input)?;
    run_impl(kind, issues, format)
}

/// Internal implementation that accepts preloaded issues for testing.
pub(crate) fn run_impl(
    kind: Option<IssueKind>,
    issues: Vec<Issue>,
    format: OutputFormat,
) -> Result<()> {
    let rows = timings::phase("report::classify", || report::classify(issues, kind));

    match format {
        OutputFormat::Text => println!("{}", display::render_classified(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
