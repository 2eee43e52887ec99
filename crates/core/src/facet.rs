// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label classification.
//!
//! [`parse`] turns an issue's raw label list into a typed [`Facet`].
//! It is total and idempotent: malformed or missing labels degrade to
//! sentinel values, never to errors.
//!
//! Group-key precedence, highest tier first:
//!
//! 1. `endpoint:` label
//! 2. `funcionalidade:` label
//! 3. legacy `endpoint_` / `funcionalidade_` label
//! 4. first candidate label (one matching no recognized prefix)
//! 5. the `uncategorized` sentinel
//!
//! Tier 4 means any stray bare label can become a grouping key. That is
//! how older snapshots tagged functional areas, so the fallback stays,
//! but it is a known source of noisy one-issue groups in the reports.

use serde::Serialize;

use crate::rules::{
    strip_prefix_ci, GROUP_PREFIXES, LEGACY_GROUP_PREFIXES, PRIORITY_PREFIX, SEVERITY_PREFIXES,
    UNCATEGORIZED,
};

/// Typed facets derived from an issue's raw label set.
///
/// One issue maps to zero-or-one values per dimension; `None` and the
/// `uncategorized` key are the "undefined" sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    /// Normalized severity/risk display value (e.g. "Critico").
    pub severity: Option<String>,
    /// Normalized priority display value (e.g. "Alta").
    pub priority: Option<String>,
    /// Functional area or endpoint used for grouping.
    pub group_key: String,
    /// Group-qualifying labels that lost the precedence race, kept
    /// verbatim for display. They never affect grouping.
    pub other_labels: Vec<String>,
}

/// What a single label contributes, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelClass {
    Severity,
    Priority,
    /// Index into [`GROUP_PREFIXES`]: 0 = endpoint, 1 = funcionalidade.
    Group(usize),
    Legacy,
    Candidate,
}

fn classify(label: &str) -> LabelClass {
    if SEVERITY_PREFIXES
        .iter()
        .any(|p| strip_prefix_ci(label, p).is_some())
    {
        return LabelClass::Severity;
    }
    if strip_prefix_ci(label, PRIORITY_PREFIX).is_some() {
        return LabelClass::Priority;
    }
    for (tier, prefix) in GROUP_PREFIXES.iter().enumerate() {
        if strip_prefix_ci(label, prefix).is_some() {
            return LabelClass::Group(tier);
        }
    }
    if LEGACY_GROUP_PREFIXES
        .iter()
        .any(|p| strip_prefix_ci(label, p).is_some())
    {
        return LabelClass::Legacy;
    }
    LabelClass::Candidate
}

/// Normalize a facet value: underscores become spaces, first letter
/// upper-cased, the rest lowered.
fn normalize_value(value: &str) -> String {
    let value = value.replace('_', " ");
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Extract the group-key value from a label of the given class.
fn group_value(label: &str, class: LabelClass) -> String {
    match class {
        LabelClass::Group(tier) => strip_prefix_ci(label, GROUP_PREFIXES[tier])
            .unwrap_or(label)
            .to_string(),
        // Legacy form: everything after the first underscore.
        LabelClass::Legacy => label
            .split_once('_')
            .map(|(_, value)| value.to_string())
            .unwrap_or_else(|| label.to_string()),
        _ => label.to_string(),
    }
}

/// Derive the [`Facet`] for a label list.
///
/// First match wins within each dimension; dimensions are independent.
pub fn parse(labels: &[String]) -> Facet {
    let classes: Vec<LabelClass> = labels.iter().map(|l| classify(l)).collect();

    let severity = labels
        .iter()
        .zip(&classes)
        .find(|(_, c)| **c == LabelClass::Severity)
        .and_then(|(label, _)| {
            SEVERITY_PREFIXES
                .iter()
                .find_map(|p| strip_prefix_ci(label, p))
        })
        .map(normalize_value);

    let priority = labels
        .iter()
        .zip(&classes)
        .find(|(_, c)| **c == LabelClass::Priority)
        .and_then(|(label, _)| strip_prefix_ci(label, PRIORITY_PREFIX))
        .map(normalize_value);

    // Walk the precedence tiers; the first label of the winning tier
    // becomes the group key.
    let winner = [
        LabelClass::Group(0),
        LabelClass::Group(1),
        LabelClass::Legacy,
        LabelClass::Candidate,
    ]
    .into_iter()
    .find_map(|wanted| classes.iter().position(|c| *c == wanted));

    let group_key = match winner {
        Some(i) => group_value(&labels[i], classes[i]),
        None => UNCATEGORIZED.to_string(),
    };

    // Every other group-qualifying label is retained verbatim.
    let other_labels = labels
        .iter()
        .zip(&classes)
        .enumerate()
        .filter(|(i, (_, c))| {
            Some(*i) != winner
                && matches!(
                    **c,
                    LabelClass::Group(_) | LabelClass::Legacy | LabelClass::Candidate
                )
        })
        .map(|(_, (label, _))| label.clone())
        .collect();

    Facet {
        severity,
        priority,
        group_key,
        other_labels,
    }
}

#[cfg(test)]
#[path = "facet_tests.rs"]
mod tests;
