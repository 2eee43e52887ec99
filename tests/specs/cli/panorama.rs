// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `bussola panorama` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;

#[path = "common.rs"]
mod common;
use common::*;

#[test]
fn panorama_shows_highlights_and_totals() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    let output = bussola()
        .arg("panorama")
        .arg("-i")
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Critical open bugs:"));
    assert!(stdout.contains("Tests needing attention:"));
    assert!(stdout.contains("Bugs: 3 total, 2 open"));
    assert!(stdout.contains("Test cases: 2 total, 1 pending"));

    // CIN-1 (score 41) outranks CIN-3 (score 33); resolved CIN-2 is absent.
    let first = stdout.find("CIN-1]").unwrap();
    let second = stdout.find("CIN-3]").unwrap();
    assert!(first < second);
    assert!(!stdout.contains("CIN-2]"));
}

#[test]
fn highlight_lines_show_risk_and_priority() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    bussola()
        .arg("panorama")
        .arg("-i")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("(risk: Critico, priority: Baixa)"))
        .stdout(predicate::str::contains("(status: Reprovado)"));
}

#[test]
fn top_flag_limits_the_highlight_sections() {
    let temp = TempDir::new().unwrap();
    let lines: Vec<String> = (0..6)
        .map(|i| {
            issue_line(
                &format!("CIN-{}", i),
                "bug",
                "Open bug",
                "A Fazer",
                &["risco-medio"],
            )
        })
        .collect();
    let snapshot = write_snapshot(temp.path(), &lines);

    let output = bussola()
        .arg("panorama")
        .arg("-i")
        .arg(&snapshot)
        .arg("--top")
        .arg("2")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let highlighted = stdout.matches("(risk: Medio").count();
    assert_eq!(highlighted, 2);
    assert!(stdout.contains("Bugs: 6 total, 6 open"));
}

#[test]
fn json_output_carries_both_summaries() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    let output = bussola()
        .arg("panorama")
        .arg("-i")
        .arg(&snapshot)
        .arg("-o")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["bugs"]["total"], 3);
    assert_eq!(json["tests"]["total"], 2);
    assert_eq!(json["top_bugs"][0]["key"], "CIN-1");
}

#[test]
fn empty_snapshot_still_renders_sections() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path(), &[]);

    bussola()
        .arg("panorama")
        .arg("-i")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("none, no open bugs"))
        .stdout(predicate::str::contains("none, all tests resolved"));
}
