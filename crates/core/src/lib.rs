// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bussola-core: analysis engine for issue-tracker snapshots
//!
//! This crate turns flat lists of tracker items (bugs and test cases
//! carrying prefix-encoded labels) into classification, grouping,
//! scoring, and Pareto (80/20) concentration reports.
//!
//! # Main Components
//!
//! - [`issue`] - Snapshot data types ([`Issue`], [`IssueKind`])
//! - [`rules`] - The ordered label/status rule tables driving every classification
//! - [`facet`] - Label parsing into typed [`Facet`] values
//! - [`score`] - Criticality and urgency scoring
//! - [`group`] - Bucketing by functional area/endpoint
//! - [`pareto`] - Cumulative-volume partitioning
//! - [`report`] - Assembly of the four report shapes
//!
//! The engine is synchronous and side-effect-free: it consumes fully
//! materialized issue collections and produces in-memory report
//! structures. Fetching snapshots and rendering output belong to the
//! callers.

pub mod error;
pub mod facet;
pub mod group;
pub mod issue;
pub mod pareto;
pub mod report;
pub mod rules;
pub mod score;

pub use error::{Error, Result};
pub use facet::Facet;
pub use group::{Group, Grouped, ScoredIssue};
pub use issue::{Issue, IssueKind};
pub use pareto::{ParetoEntry, ParetoPartition};
pub use report::{BugMap, CoverageMap, GroupReport, KindSummary, Panorama, VolumeReport};
pub use rules::StatusSet;
