use crate::cli::support::pathgraph;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    pathgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathgraph"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("neighbors"));
}

#[test]
fn test_no_command_prints_help() {
    pathgraph()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathgraph"));
}

#[test]
fn test_vertices_in_registration_order() {
    pathgraph()
        .arg("vertices")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A\nB\nC\nD\nE\n"))
        .stdout(predicate::str::contains("5 vertices, 6 edges"));
}

#[test]
fn test_vertices_json() {
    let output = pathgraph()
        .args(["vertices", "--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!(["A", "B", "C", "D", "E"]));
}

#[test]
fn test_unknown_algorithm_json_envelope() {
    pathgraph()
        .args(["--format", "json", "path", "A", "E", "--algorithm", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_verbose_logs_to_stderr() {
    pathgraph()
        .args(["--verbose", "path", "A", "E"])
        .assert()
        .success()
        .stderr(predicate::str::contains("destination reached"));
}
