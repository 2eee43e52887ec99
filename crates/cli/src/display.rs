// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for the report shapes.
//!
//! Formatters are pure: they take report structures and return the full
//! text block; commands decide where the output goes.

use bussola_core::{BugMap, CoverageMap, IssueKind, Panorama, ScoredIssue, StatusSet, VolumeReport};

/// Marker prefixed to an issue's status: `!` open, `ok` resolved.
fn status_marker(status: &str, resolved: &StatusSet) -> &'static str {
    if resolved.contains(status) {
        "ok"
    } else {
        "!"
    }
}

fn undefined(value: Option<&str>) -> &str {
    value.unwrap_or("n/d")
}

/// Format a single bug line for the concentration map.
pub fn format_bug_line(issue: &ScoredIssue, resolved: &StatusSet) -> String {
    format!(
        "  - [{} {}] {}: {} (score {})",
        status_marker(&issue.issue.status, resolved),
        issue.issue.status,
        issue.issue.key,
        issue.issue.title,
        issue.score
    )
}

/// Format a single test line for the coverage map.
pub fn format_test_line(issue: &ScoredIssue) -> String {
    format!(
        "  - [{}] [risk: {}] {}: {}",
        issue.issue.status,
        undefined(issue.facet.severity.as_deref()),
        issue.issue.key,
        issue.issue.title
    )
}

/// Render the bug concentration map.
pub fn render_bug_map(map: &BugMap, resolved: &StatusSet) -> String {
    if map.groups.is_empty() {
        return "No bugs found.".to_string();
    }

    let mut out = Vec::new();
    out.push("Bug concentration by functional area/endpoint".to_string());
    out.push(format!(
        "{} bugs in {} groups",
        map.total,
        map.groups.len()
    ));

    for group in &map.groups {
        out.push(String::new());
        out.push(format!(
            "{} (total {}, open {})",
            group.key, group.total, group.open
        ));
        for issue in &group.issues {
            out.push(format_bug_line(issue, resolved));
        }
    }

    out.join("\n")
}

/// Render the test coverage map.
pub fn render_coverage_map(map: &CoverageMap) -> String {
    if map.groups.is_empty() {
        return "No test cases found.".to_string();
    }

    let mut out = Vec::new();
    out.push("Test coverage by functional area/endpoint".to_string());
    out.push(format!(
        "{} test cases in {} groups",
        map.total,
        map.groups.len()
    ));

    for group in &map.groups {
        out.push(String::new());
        out.push(format!(
            "{} (total {}, pending {})",
            group.key, group.total, group.open
        ));
        for issue in &group.issues {
            out.push(format_test_line(issue));
        }
    }

    out.join("\n")
}

/// Render the project panorama.
pub fn render_panorama(report: &Panorama, project: &str) -> String {
    let mut out = Vec::new();

    let date = report.generated_at.format("%Y-%m-%d");
    if project.is_empty() {
        out.push(format!("Project panorama ({})", date));
    } else {
        out.push(format!("Project panorama: {} ({})", project, date));
    }

    out.push(String::new());
    out.push("Critical open bugs:".to_string());
    if report.top_bugs.is_empty() {
        out.push("  none, no open bugs".to_string());
    }
    for bug in &report.top_bugs {
        out.push(format!(
            "  - [{}] {} (risk: {}, priority: {})",
            bug.issue.key,
            bug.issue.title,
            undefined(bug.facet.severity.as_deref()),
            undefined(bug.facet.priority.as_deref())
        ));
    }

    out.push(String::new());
    out.push("Tests needing attention:".to_string());
    if report.attention_tests.is_empty() {
        out.push("  none, all tests resolved".to_string());
    }
    for test in &report.attention_tests {
        out.push(format!(
            "  - [{}] {} (status: {})",
            test.issue.key, test.issue.title, test.issue.status
        ));
    }

    out.push(String::new());
    out.push(format!(
        "Bugs: {} total, {} open",
        report.bugs.total, report.bugs.open
    ));
    for count in &report.bugs.by_status {
        out.push(format!("  - {}: {}", count.status, count.count));
    }

    out.push(String::new());
    out.push(format!(
        "Test cases: {} total, {} pending",
        report.tests.total, report.tests.open
    ));
    for count in &report.tests.by_status {
        out.push(format!("  - {}: {}", count.status, count.count));
    }

    out.join("\n")
}

/// Render the Pareto volume report.
pub fn render_volume(report: &VolumeReport) -> String {
    let population = match report.kind {
        IssueKind::Bug => "bugs",
        IssueKind::TestCase => "test cases",
    };

    if report.partition.is_empty() {
        return format!("No {} found to analyze.", population);
    }

    let mut out = Vec::new();
    out.push(format!("Pareto analysis by volume of {}", population));
    out.push(format!(
        "Base: {} items in {} groups",
        report.partition.total,
        report.partition.entries.len()
    ));

    out.push(String::new());
    out.push("Vital few:".to_string());
    for entry in report.partition.vital() {
        out.push(format_volume_line(entry));
    }

    if !report.partition.remainder().is_empty() {
        out.push("Trivial many:".to_string());
        for entry in report.partition.remainder() {
            out.push(format_volume_line(entry));
        }
    }

    out.push(String::new());
    out.push(format!(
        "Vital set: {} of {} groups ({:.1}% of all {})",
        report.partition.vital_len,
        report.partition.entries.len(),
        report.partition.vital_percent(),
        population
    ));

    out.join("\n")
}

fn format_volume_line(entry: &bussola_core::ParetoEntry) -> String {
    format!(
        "  - {:<30} {:>4}  ({:.1}% | cum {:.1}%)",
        entry.key, entry.count, entry.individual_percent, entry.cumulative_percent
    )
}

/// Format one classification row.
pub fn format_classified_row(issue: &ScoredIssue) -> String {
    let mut line = format!(
        "- {}: {} [{}] group: {} | severity: {} | priority: {} | score: {}",
        issue.issue.key,
        issue.issue.title,
        issue.issue.status,
        issue.facet.group_key,
        undefined(issue.facet.severity.as_deref()),
        undefined(issue.facet.priority.as_deref()),
        issue.score
    );
    if !issue.facet.other_labels.is_empty() {
        line.push_str(&format!(
            " | labels: {}",
            issue.facet.other_labels.join(", ")
        ));
    }
    if let Some(assignee) = &issue.issue.assignee {
        line.push_str(&format!(" | assignee: {}", assignee));
    }
    line.push_str(&format!(
        " | created: {}",
        issue.issue.created_at.format("%Y-%m-%d")
    ));
    line
}

/// Render the per-issue classification listing.
pub fn render_classified(rows: &[ScoredIssue]) -> String {
    if rows.is_empty() {
        return "No issues found.".to_string();
    }

    let mut out = Vec::new();
    out.push(format!("{} issues", rows.len()));
    for row in rows {
        out.push(format_classified_row(row));
    }
    out.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
