// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::config;
use crate::error::Result;

pub fn run(project: Option<&str>, path: Option<&str>) -> Result<()> {
    let base = match path {
        Some(p) => Path::new(p).to_path_buf(),
        None => std::env::current_dir()?,
    };
    let created = config::init_config(&base, project.unwrap_or_default())?;
    println!("Initialized bussola configuration at {}", created.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
