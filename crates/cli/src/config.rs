// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.bussola/config.toml` and includes:
//! - `project`: The tracker project key the snapshots come from (e.g., "CIN")
//! - `snapshot`: Optional default snapshot path, relative to the project root
//! - `[resolved]`: Optional overrides for the resolved-status sets
//!
//! Every report command also runs without configuration, using the
//! built-in defaults; `init` only makes the defaults explicit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use bussola_core::StatusSet;

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".bussola";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Overrides for the status names treated as resolved.
///
/// Bugs and tests keep separate lists: a resolved bug and an approved
/// test are different concepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<String>>,
}

impl ResolvedConfig {
    fn is_default(&self) -> bool {
        self.bugs.is_none() && self.tests.is_none()
    }
}

/// Project configuration stored in `.bussola/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tracker project key (display only).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project: String,
    /// Default snapshot path (relative to the project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
    /// Resolved-status overrides.
    #[serde(default, skip_serializing_if = "ResolvedConfig::is_default")]
    pub resolved: ResolvedConfig,
}

impl Config {
    /// Load the configuration from a project root containing `.bussola/`.
    pub fn load(root: &Path) -> Result<Config> {
        let path = root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Write the configuration into `<root>/.bussola/config.toml`.
    pub fn save(&self, root: &Path) -> Result<()> {
        let dir = root.join(CONFIG_DIR_NAME);
        fs::create_dir_all(&dir)?;
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Statuses treated as resolved for bug reports.
    pub fn bug_resolved(&self) -> StatusSet {
        match &self.resolved.bugs {
            Some(names) => StatusSet::new(names.iter().cloned()),
            None => StatusSet::bug_resolved(),
        }
    }

    /// Statuses treated as resolved for test reports.
    pub fn test_resolved(&self) -> StatusSet {
        match &self.resolved.tests {
            Some(names) => StatusSet::new(names.iter().cloned()),
            None => StatusSet::test_resolved(),
        }
    }

    /// Default snapshot path, resolved against the project root.
    pub fn snapshot_path(&self, root: &Path) -> Option<PathBuf> {
        self.snapshot.as_ref().map(|s| {
            let path = Path::new(s);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            }
        })
    }
}

/// Find the nearest project root (a directory containing `.bussola/`),
/// walking up from the current directory.
pub fn find_project_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME).is_file() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Load the nearest configuration, or defaults when uninitialized.
///
/// Returns the project root alongside so snapshot paths can be resolved
/// relative to it.
pub fn discover() -> Result<(Option<PathBuf>, Config)> {
    match find_project_root() {
        Some(root) => {
            let config = Config::load(&root)?;
            Ok((Some(root), config))
        }
        None => Ok((None, Config::default())),
    }
}

/// Create `.bussola/config.toml` under `base`.
///
/// Fails if a configuration file already exists there.
pub fn init_config(base: &Path, project: &str) -> Result<PathBuf> {
    let path = base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }
    let config = Config {
        project: project.to_string(),
        ..Config::default()
    };
    config.save(base)?;
    Ok(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
