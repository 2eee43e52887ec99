// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bussola_core::{report, Issue};
use chrono::Utc;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::timings;

pub fn run(input: Option<&str>, top: usize, format: OutputFormat) -> Result<()> {
    let (config, issues) = super::load(input)?;
    run_impl(&config, issues, top, format)
}

/// Internal implementation that accepts preloaded issues for testing.
pub(crate) fn run_impl(
    config: &Config,
    issues: Vec<Issue>,
    top: usize,
    format: OutputFormat,
) -> Result<()> {
    let bug_resolved = config.bug_resolved();
    let test_resolved = config.test_resolved();
    let overview = timings::phase("report::panorama", || {
        report::panorama(issues, &bug_resolved, &test_resolved, top, Utc::now())
    });

    match format {
        OutputFormat::Text => println!("{}", display::render_panorama(&overview, &config.project)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overview)?),
    }

    Ok(())
}

#[cfg(test)]
#[path = "panorama_tests.rs"]
mod tests;
