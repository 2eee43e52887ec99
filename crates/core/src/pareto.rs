// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cumulative-volume (80/20) analysis.
//!
//! Partitions group counts into the "vital few", the smallest leading
//! set of groups whose combined volume reaches the threshold, and the
//! "trivial many" remainder.

use serde::Serialize;

/// Cumulative share (percent) at which groups stop counting as vital.
const VITAL_THRESHOLD: f64 = 80.0;

/// One group's share of the total volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoEntry {
    pub key: String,
    pub count: usize,
    /// This group's share of the total, in percent.
    pub individual_percent: f64,
    /// Running share including this group, in percent.
    pub cumulative_percent: f64,
}

/// Volume partition between the vital few and the trivial many.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParetoPartition {
    /// All groups, largest first (ties keep first-seen order).
    pub entries: Vec<ParetoEntry>,
    /// Number of leading entries in the vital set.
    pub vital_len: usize,
    /// Total volume across all groups.
    pub total: usize,
}

impl ParetoPartition {
    /// The leading groups that together reach the threshold.
    pub fn vital(&self) -> &[ParetoEntry] {
        &self.entries[..self.vital_len]
    }

    /// Everything after the vital boundary.
    pub fn remainder(&self) -> &[ParetoEntry] {
        &self.entries[self.vital_len..]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined share of the vital set, in percent.
    pub fn vital_percent(&self) -> f64 {
        self.vital().last().map(|e| e.cumulative_percent).unwrap_or(0.0)
    }
}

/// Partition group counts by cumulative volume.
///
/// Groups are stably sorted by count descending, so tied groups keep
/// their first-seen order. A group is vital while the cumulative share
/// *before* it is under the threshold; the group that crosses the
/// threshold is therefore still vital. An empty or all-zero input
/// yields an empty partition with no division by zero.
pub fn analyze(counts: &[(String, usize)]) -> ParetoPartition {
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return ParetoPartition::default();
    }

    let mut sorted: Vec<&(String, usize)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let mut entries = Vec::with_capacity(sorted.len());
    let mut vital_len = 0;
    let mut cumulative = 0.0;

    for (key, count) in sorted {
        let individual = (*count as f64) / (total as f64) * 100.0;
        if cumulative < VITAL_THRESHOLD {
            vital_len += 1;
        }
        cumulative += individual;
        entries.push(ParetoEntry {
            key: key.clone(),
            count: *count,
            individual_percent: individual,
            cumulative_percent: cumulative,
        });
    }

    ParetoPartition {
        entries,
        vital_len,
        total,
    }
}

#[cfg(test)]
#[path = "pareto_tests.rs"]
mod tests;
