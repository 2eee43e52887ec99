// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `bussola classify` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;

#[path = "common.rs"]
mod common;
use common::*;

#[test]
fn rows_show_derived_facets() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        temp.path(),
        &[issue_line(
            "CIN-5",
            "bug",
            "Broken checkout",
            "A Fazer",
            &["risco-alto", "endpoint:carrinho", "flaky"],
        )],
    );

    bussola()
        .arg("classify")
        .arg("-i")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("group: carrinho"))
        .stdout(predicate::str::contains("severity: Alto"))
        .stdout(predicate::str::contains("score: 30"))
        .stdout(predicate::str::contains("labels: flaky"));
}

#[test]
fn kind_flag_narrows_the_population() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    let output = bussola()
        .arg("classify")
        .arg("--kind")
        .arg("bugs")
        .arg("-i")
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 issues"));
    assert!(stdout.contains("CIN-1"));
    assert!(!stdout.contains("CIN-10"));
}

#[test]
fn json_rows_carry_facets_and_scores() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    let output = bussola()
        .arg("classify")
        .arg("-i")
        .arg(&snapshot)
        .arg("-o")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["key"], "CIN-1");
    assert_eq!(json[0]["facet"]["group_key"], "login");
    assert_eq!(json[0]["score"], 41);
    // Test cases rank by status: Reprovado is 5.
    assert_eq!(json[3]["outcome_rank"], 5);
}

#[test]
fn unlabeled_issues_fall_back_to_uncategorized() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        temp.path(),
        &[issue_line("CIN-6", "bug", "Stray bug", "A Fazer", &[])],
    );

    bussola()
        .arg("classify")
        .arg("-i")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("group: uncategorized"))
        .stdout(predicate::str::contains("severity: n/d"))
        .stdout(predicate::str::contains("score: 0"));
}
