// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for top-level flags and help output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;
use yare::parameterized;

#[path = "common.rs"]
mod common;
use common::*;

#[test]
fn version_flag_prints_the_version() {
    bussola()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_the_report_commands() {
    let output = bussola().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["bug-map", "coverage-map", "panorama", "pareto", "classify", "init"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[parameterized(
    bug_map = { "bug-map" },
    coverage_map = { "coverage-map" },
    panorama = { "panorama" },
    pareto = { "pareto" },
    classify = { "classify" },
)]
fn subcommand_help_shows_examples(command: &str) {
    bussola()
        .arg(command)
        .arg("--help")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn unknown_command_fails() {
    bussola().arg("frobnicate").assert().failure();
}

#[test]
fn completion_generates_a_script() {
    bussola()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("bussola"));
}
