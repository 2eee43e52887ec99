// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping engine.
//!
//! Buckets issues by their derived group key. Groups appear in the
//! order their key was first seen; issues keep input order within a
//! group. The engine imposes no ranking of its own; each report
//! requests the sort it needs.

use std::collections::HashMap;

use serde::Serialize;

use crate::facet::{self, Facet};
use crate::issue::Issue;
use crate::rules::StatusSet;
use crate::score;

/// An issue annotated with its derived facets and scores.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredIssue {
    #[serde(flatten)]
    pub issue: Issue,
    /// Facets derived from the label list.
    pub facet: Facet,
    /// Bug criticality score.
    pub score: u32,
    /// Test outcome rank of the status.
    pub outcome_rank: u8,
}

impl ScoredIssue {
    /// Annotate an issue with its facet and both scores.
    pub fn annotate(issue: Issue) -> Self {
        let facet = facet::parse(&issue.labels);
        let score = score::criticality(&issue.labels);
        let outcome_rank = score::urgency(&issue.status);
        ScoredIssue {
            issue,
            facet,
            score,
            outcome_rank,
        }
    }
}

/// A bucket of issues sharing a group key.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// Functional area or endpoint name.
    pub key: String,
    /// Member issues in input order.
    pub issues: Vec<ScoredIssue>,
}

impl Group {
    /// Total number of issues in the group.
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    /// Number of issues whose status is not in the resolved set.
    pub fn open(&self, resolved: &StatusSet) -> usize {
        self.issues
            .iter()
            .filter(|i| !resolved.contains(&i.issue.status))
            .count()
    }
}

/// Groups in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Grouped {
    pub groups: Vec<Group>,
}

impl Grouped {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Per-group sizes in first-seen order, as Pareto input.
    pub fn counts(&self) -> Vec<(String, usize)> {
        self.groups
            .iter()
            .map(|g| (g.key.clone(), g.total()))
            .collect()
    }
}

/// Bucket issues by their derived group key.
///
/// Total: every issue lands in exactly one group, falling back to the
/// `uncategorized` sentinel when no label qualifies.
pub fn group(issues: impl IntoIterator<Item = Issue>) -> Grouped {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for issue in issues {
        let scored = ScoredIssue::annotate(issue);
        let slot = index.get(&scored.facet.group_key).copied();
        match slot {
            Some(slot) => groups[slot].issues.push(scored),
            None => {
                let key = scored.facet.group_key.clone();
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    issues: vec![scored],
                });
            }
        }
    }

    Grouped { groups }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
