// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bussola_core::{report, Issue};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::timings;

pub fn run(input: Option<&str>, format: OutputFormat) -> Result<()> {
    let (config, issues) = super::load(input)?;
    run_impl(&config, issues, format)
}

/// Internal implementation that accepts preloaded issues for testing.
pub(crate) fn run_impl(config: &Config, issues: Vec<Issue>, format: OutputFormat) -> Result<()> {
    let resolved = config.test_resolved();
    let map = timings::phase("report::coverage_map", || report::coverage_map(issues, &resolved));

    match format {
        OutputFormat::Text => println!("{}", display::render_coverage_map(&map)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&map)?),
    }

    Ok(())
}

#[cfg(test)]
#[path = "coverage_map_tests.rs"]
mod tests;
