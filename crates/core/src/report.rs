// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report assembly.
//!
//! Composes the grouping, scoring, and Pareto engines into the four
//! report shapes the CLI renders. Composition only: each function picks
//! a population, a sort order, and a resolved-status set. Every rule
//! lives in [`crate::facet`], [`crate::score`], [`crate::group`], and
//! [`crate::pareto`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::group::{self, Group, ScoredIssue};
use crate::issue::{Issue, IssueKind};
use crate::pareto::{self, ParetoPartition};
use crate::rules::StatusSet;

/// Default number of highlighted items in panorama sections.
pub const DEFAULT_TOP: usize = 5;

/// Per-group aggregate row for the concentration and coverage maps.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub key: String,
    pub total: usize,
    /// Issues whose status is outside the report's resolved set.
    pub open: usize,
    pub issues: Vec<ScoredIssue>,
}

/// Bug concentration map: groups by volume, bugs by criticality.
#[derive(Debug, Clone, Serialize)]
pub struct BugMap {
    pub groups: Vec<GroupReport>,
    pub total: usize,
}

/// Test coverage map: groups by name, tests by outcome rank.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageMap {
    pub groups: Vec<GroupReport>,
    pub total: usize,
}

/// Status-name counter in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Totals for one issue kind in the panorama.
#[derive(Debug, Clone, Serialize)]
pub struct KindSummary {
    pub total: usize,
    pub open: usize,
    pub by_status: Vec<StatusCount>,
}

/// Project panorama: highlights plus per-status totals for both kinds.
#[derive(Debug, Clone, Serialize)]
pub struct Panorama {
    pub generated_at: DateTime<Utc>,
    pub bugs: KindSummary,
    pub tests: KindSummary,
    /// Open bugs ranked by criticality, highest first.
    pub top_bugs: Vec<ScoredIssue>,
    /// Pending tests ranked by outcome, most urgent first.
    pub attention_tests: Vec<ScoredIssue>,
}

/// Pareto volume report over one issue kind.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeReport {
    pub kind: IssueKind,
    pub partition: ParetoPartition,
}

fn of_kind(issues: Vec<Issue>, kind: IssueKind) -> Vec<Issue> {
    issues.into_iter().filter(|i| i.kind == kind).collect()
}

/// Count statuses in first-seen order.
fn count_statuses(issues: &[ScoredIssue]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for issue in issues {
        match counts.iter().position(|c| c.status == issue.issue.status) {
            Some(i) => counts[i].count += 1,
            None => counts.push(StatusCount {
                status: issue.issue.status.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Build the bug concentration map.
///
/// Groups are ordered by total descending (stable), bugs within a group
/// by criticality score descending (stable).
pub fn bug_map(issues: Vec<Issue>, resolved: &StatusSet) -> BugMap {
    let grouped = group::group(of_kind(issues, IssueKind::Bug));
    let total = grouped.groups.iter().map(Group::total).sum();

    let mut groups: Vec<GroupReport> = grouped
        .groups
        .into_iter()
        .map(|g| {
            let open = g.open(resolved);
            let mut issues = g.issues;
            issues.sort_by(|a, b| b.score.cmp(&a.score));
            GroupReport {
                key: g.key,
                total: issues.len(),
                open,
                issues,
            }
        })
        .collect();
    groups.sort_by(|a, b| b.total.cmp(&a.total));

    BugMap { groups, total }
}

/// Build the test coverage map.
///
/// Groups are ordered by key ascending, tests within a group by outcome
/// rank descending (stable), so failed and blocked cases surface first.
pub fn coverage_map(issues: Vec<Issue>, resolved: &StatusSet) -> CoverageMap {
    let grouped = group::group(of_kind(issues, IssueKind::TestCase));
    let total = grouped.groups.iter().map(Group::total).sum();

    let mut groups: Vec<GroupReport> = grouped
        .groups
        .into_iter()
        .map(|g| {
            let open = g.open(resolved);
            let mut issues = g.issues;
            issues.sort_by(|a, b| b.outcome_rank.cmp(&a.outcome_rank));
            GroupReport {
                key: g.key,
                total: issues.len(),
                open,
                issues,
            }
        })
        .collect();
    groups.sort_by(|a, b| a.key.cmp(&b.key));

    CoverageMap { groups, total }
}

/// Build the project panorama.
///
/// `top` bounds both highlight sections; `generated_at` is supplied by
/// the caller so the assembly stays clock-free.
pub fn panorama(
    issues: Vec<Issue>,
    bug_resolved: &StatusSet,
    test_resolved: &StatusSet,
    top: usize,
    generated_at: DateTime<Utc>,
) -> Panorama {
    let (bugs, tests): (Vec<Issue>, Vec<Issue>) =
        issues.into_iter().partition(|i| i.kind == IssueKind::Bug);

    let bugs: Vec<ScoredIssue> = bugs.into_iter().map(ScoredIssue::annotate).collect();
    let tests: Vec<ScoredIssue> = tests.into_iter().map(ScoredIssue::annotate).collect();

    let mut top_bugs: Vec<ScoredIssue> = bugs
        .iter()
        .filter(|b| !bug_resolved.contains(&b.issue.status))
        .cloned()
        .collect();
    top_bugs.sort_by(|a, b| b.score.cmp(&a.score));
    let bugs_open = top_bugs.len();
    top_bugs.truncate(top);

    let mut attention_tests: Vec<ScoredIssue> = tests
        .iter()
        .filter(|t| !test_resolved.contains(&t.issue.status))
        .cloned()
        .collect();
    attention_tests.sort_by(|a, b| b.outcome_rank.cmp(&a.outcome_rank));
    let tests_open = attention_tests.len();
    attention_tests.truncate(top);

    Panorama {
        generated_at,
        bugs: KindSummary {
            total: bugs.len(),
            open: bugs_open,
            by_status: count_statuses(&bugs),
        },
        tests: KindSummary {
            total: tests.len(),
            open: tests_open,
            by_status: count_statuses(&tests),
        },
        top_bugs,
        attention_tests,
    }
}

/// Build the Pareto volume report for one issue kind.
///
/// Volume counts every issue of the kind regardless of status: a
/// resolved bug still tells us where bugs concentrate.
pub fn volume(issues: Vec<Issue>, kind: IssueKind) -> VolumeReport {
    let grouped = group::group(of_kind(issues, kind));
    let partition = pareto::analyze(&grouped.counts());
    VolumeReport { kind, partition }
}

/// Annotate issues for the per-item classification listing.
///
/// Preserves input order; `kind` narrows the population when given.
pub fn classify(issues: Vec<Issue>, kind: Option<IssueKind>) -> Vec<ScoredIssue> {
    issues
        .into_iter()
        .filter(|i| kind.is_none_or(|k| i.kind == k))
        .map(ScoredIssue::annotate)
        .collect()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
