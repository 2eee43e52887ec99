// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `bussola bug-map` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;

#[path = "common.rs"]
mod common;
use common::*;

#[test]
fn groups_sort_by_volume_and_bugs_by_score() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    let output = bussola()
        .arg("bug-map")
        .arg("-i")
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // login has 2 bugs, carrinho 1: login group comes first.
    let login = stdout.find("login (total 2, open 1)").unwrap();
    let carrinho = stdout.find("carrinho (total 1, open 1)").unwrap();
    assert!(login < carrinho);

    // Within login, the critical bug (score 41) outranks the low one.
    let critical = stdout.find("CIN-1").unwrap();
    let low = stdout.find("CIN-2").unwrap();
    assert!(critical < low);
    assert!(stdout.contains("(score 41)"));
}

#[test]
fn test_cases_never_appear_in_the_bug_map() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    bussola()
        .arg("bug-map")
        .arg("-i")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("CIN-10").not());
}

#[test]
fn json_output_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    let output = bussola()
        .arg("bug-map")
        .arg("-i")
        .arg(&snapshot)
        .arg("-o")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["groups"][0]["key"], "login");
    assert_eq!(json["groups"][0]["open"], 1);
    assert_eq!(json["groups"][0]["issues"][0]["score"], 41);
}

#[test]
fn snapshot_can_come_from_stdin() {
    let line = issue_line("CIN-9", "bug", "Broken sort", "A Fazer", &["endpoint:busca"]);

    bussola()
        .arg("bug-map")
        .arg("-i")
        .arg("-")
        .write_stdin(format!("{}\n", line))
        .assert()
        .success()
        .stdout(predicate::str::contains("busca (total 1, open 1)"));
}

#[test]
fn missing_input_is_a_clear_error() {
    let temp = TempDir::new().unwrap();

    bussola()
        .arg("bug-map")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snapshot input"));
}

#[test]
fn malformed_snapshot_reports_the_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.jsonl");
    std::fs::write(&path, "not json\n").unwrap();

    bussola()
        .arg("bug-map")
        .arg("-i")
        .arg(path.display().to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}
