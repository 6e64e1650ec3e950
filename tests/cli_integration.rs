// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the parkroute CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn parkroute() -> Command {
    Command::cargo_bin("parkroute").expect("binary builds")
}

#[test]
fn test_parks_lists_all_twenty() {
    parkroute()
        .arg("parks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Magic Kingdom, FL"))
        .stdout(predicate::str::contains("Busch Gardens Tampa Bay, FL"))
        .stdout(predicate::str::contains("20 parks, 20 routes"));
}

#[test]
fn test_route_runs_all_three_solvers() {
    let assert = parkroute()
        .args(["route", "1", "9", "--renderer", "dot"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Dijkstra"));
    assert!(output.contains("Bellman-Ford"));
    assert!(output.contains("Uniform Cost Search"));
    // Known shortest distance for parks 1 -> 9
    assert!(output.contains("9225"));
    // Each solver emits a DOT document with highlighted path edges
    assert_eq!(output.matches("graph parkroute {").count(), 3);
    assert!(output.contains("color=red"));
}

#[test]
fn test_route_single_algorithm() {
    parkroute()
        .args(["route", "2", "3", "--algorithm", "dijkstra", "--renderer", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra"))
        .stdout(predicate::str::contains("95"))
        .stdout(predicate::str::contains("Bellman-Ford").not());
}

#[test]
fn test_route_same_start_and_end_highlights_nothing() {
    parkroute()
        .args(["route", "5", "5", "--algorithm", "ucs", "--renderer", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color=red").not());
}

#[test]
fn test_route_json_renderer() {
    parkroute()
        .args(["route", "1", "2", "--algorithm", "dijkstra", "--renderer", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\""))
        .stdout(predicate::str::contains("\"highlighted\""));
}

#[test]
fn test_route_rejects_out_of_range_selection() {
    parkroute()
        .args(["route", "99", "1", "--renderer", "dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_route_rejects_unknown_algorithm() {
    parkroute()
        .args(["route", "1", "2", "--algorithm", "astar", "--renderer", "dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm"));
}

#[test]
fn test_route_prompts_when_indices_omitted() {
    parkroute()
        .args(["route", "--renderer", "dot"])
        .write_stdin("1\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select start park"))
        .stdout(predicate::str::contains("9225"));
}

#[test]
fn test_view_emits_base_graph() {
    parkroute()
        .args(["view", "--renderer", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph parkroute"))
        .stdout(predicate::str::contains("color=red").not());
}

#[test]
fn test_export_dot() {
    parkroute()
        .args(["export", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph parkroute"))
        .stdout(predicate::str::contains("\"Magic Kingdom, FL\" -- \"Disneyland, CA\""));
}

#[test]
fn test_export_json_round_trips() {
    let assert = parkroute()
        .args(["export", "--format", "json"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["parks"].as_array().unwrap().len(), 20);
    assert_eq!(value["routes"].as_array().unwrap().len(), 20);
}

#[test]
fn test_export_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parks.dot");

    parkroute()
        .args(["export", "--format", "dot", "--output"])
        .arg(&path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("graph parkroute"));
}

#[test]
fn test_export_rejects_unknown_format() {
    parkroute()
        .args(["export", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn test_completions_generate() {
    parkroute()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parkroute"));
}

#[test]
fn test_config_file_sets_renderer() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "renderer = \"dot\"\n[layout]\niterations = 50\n").unwrap();

    parkroute()
        .env("PARKROUTE_CONFIG", &config_path)
        .args(["route", "1", "2", "--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph parkroute"));
}
