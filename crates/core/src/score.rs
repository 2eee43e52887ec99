// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Criticality and urgency scoring.
//!
//! Scores are pure functions of `(labels, status)` and are used only
//! for ranking within reports; ties keep the original fetch order.

use crate::rules::{outcome_rank, PRIORITY_WEIGHTS, RISK_WEIGHTS};

/// Gap between risk tiers. Priority weights top out at 3, so no
/// priority value can outrank a higher risk tier.
const RISK_FACTOR: u32 = 10;

fn max_weight(labels: &[String], table: &[(&str, u32)]) -> u32 {
    labels
        .iter()
        .filter_map(|label| {
            table
                .iter()
                .find(|(name, _)| label.eq_ignore_ascii_case(name))
                .map(|(_, weight)| *weight)
        })
        .max()
        .unwrap_or(0)
}

/// Bug criticality score: `risk_weight * 10 + priority_weight`.
///
/// Both weights take the maximum over all matching labels and default
/// to 0, so an unlabeled bug scores 0.
pub fn criticality(labels: &[String]) -> u32 {
    let risk = max_weight(labels, RISK_WEIGHTS);
    let priority = max_weight(labels, PRIORITY_WEIGHTS);
    risk * RISK_FACTOR + priority
}

/// Test urgency score: the outcome rank of the status name.
///
/// Failed and blocked cases sort above in-progress and todo, which sort
/// above passed; unknown statuses sort last with rank 0.
pub fn urgency(status: &str) -> u8 {
    outcome_rank(status)
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
