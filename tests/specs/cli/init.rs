// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `bussola init` command and config discovery.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;

#[path = "common.rs"]
mod common;
use common::*;

#[test]
fn init_creates_the_config_file() {
    let temp = TempDir::new().unwrap();

    bussola()
        .arg("init")
        .arg("--project")
        .arg("cin")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized bussola configuration"));

    let config = std::fs::read_to_string(temp.path().join(".bussola/config.toml")).unwrap();
    assert!(config.contains("project = \"cin\""));
}

#[test]
fn double_init_fails() {
    let temp = TempDir::new().unwrap();

    bussola()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();

    bussola()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn project_key_from_config_shows_in_the_panorama() {
    let temp = TempDir::new().unwrap();
    let snapshot = mixed_snapshot(temp.path());

    bussola()
        .arg("init")
        .arg("--project")
        .arg("CIN")
        .current_dir(temp.path())
        .assert()
        .success();

    bussola()
        .arg("panorama")
        .arg("-i")
        .arg(&snapshot)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project panorama: CIN"));
}

#[test]
fn configured_snapshot_path_is_the_default_input() {
    let temp = TempDir::new().unwrap();
    mixed_snapshot(temp.path());

    std::fs::create_dir_all(temp.path().join(".bussola")).unwrap();
    std::fs::write(
        temp.path().join(".bussola/config.toml"),
        "project = \"cin\"\nsnapshot = \"issues.jsonl\"\n",
    )
    .unwrap();

    bussola()
        .arg("bug-map")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("login (total 2, open 1)"));
}

#[test]
fn config_discovery_walks_up_from_subdirectories() {
    let temp = TempDir::new().unwrap();
    mixed_snapshot(temp.path());
    std::fs::create_dir_all(temp.path().join(".bussola")).unwrap();
    std::fs::write(
        temp.path().join(".bussola/config.toml"),
        "snapshot = \"issues.jsonl\"\n",
    )
    .unwrap();

    let nested = temp.path().join("reports/weekly");
    std::fs::create_dir_all(&nested).unwrap();

    bussola()
        .arg("bug-map")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("carrinho"));
}

#[test]
fn resolved_overrides_change_open_counts() {
    let temp = TempDir::new().unwrap();
    mixed_snapshot(temp.path());
    std::fs::create_dir_all(temp.path().join(".bussola")).unwrap();
    std::fs::write(
        temp.path().join(".bussola/config.toml"),
        "snapshot = \"issues.jsonl\"\n\n[resolved]\nbugs = [\"a fazer\", \"feito\"]\n",
    )
    .unwrap();

    bussola()
        .arg("bug-map")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("login (total 2, open 0)"));
}
