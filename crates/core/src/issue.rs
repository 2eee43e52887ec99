// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot issue types.
//!
//! An [`Issue`] is a point-in-time record exported from the remote
//! tracker by the surrounding tooling. The engine never mutates one and
//! never talks to the tracker itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of tracker items covered by the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Defect reported against the product.
    Bug,
    /// Scripted test case tracked as a regular issue.
    TestCase,
}

impl IssueKind {
    /// Returns the string representation used in snapshots and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Bug => "bug",
            IssueKind::TestCase => "test_case",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bug" | "bugs" => Ok(IssueKind::Bug),
            "test_case" | "test-case" | "test" | "tests" => Ok(IssueKind::TestCase),
            _ => Err(Error::InvalidIssueKind(s.to_string())),
        }
    }
}

/// A point-in-time tracker item.
///
/// The `status` field is the tracker's free-text status name; the engine
/// interprets it only through the lookup tables in [`crate::rules`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker key, project-prefixed (e.g., "CIN-42").
    pub key: String,
    /// Item classification.
    pub kind: IssueKind,
    /// Summary line.
    pub title: String,
    /// Workflow status name as reported by the tracker.
    pub status: String,
    /// Labels in original fetch order.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Display name of the current assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Display name of the reporter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// When the item was created in the tracker.
    pub created_at: DateTime<Utc>,
}

impl Issue {
    /// Test helper: construct an Issue with the given labels and status.
    /// Production code deserializes Issues from snapshot lines.
    #[cfg(test)]
    pub fn sample(key: &str, kind: IssueKind, status: &str, labels: &[&str]) -> Self {
        Issue {
            key: key.to_string(),
            kind,
            title: format!("Issue {}", key),
            status: status.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            assignee: None,
            reporter: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
