use crate::cli::support::{pathgraph, write_graph, SAMPLE_WITH_ISOLATED};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_neighbors_in_insertion_order() {
    pathgraph()
        .args(["neighbors", "C"])
        .assert()
        .success()
        .stdout("C -> A (6)\nC -> D (2)\nC -> E (4)\n");
}

#[test]
fn test_neighbors_isolated_vertex() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), SAMPLE_WITH_ISOLATED);

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["neighbors", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No neighbors for F"));
}

#[test]
fn test_neighbors_json() {
    let output = pathgraph()
        .args(["neighbors", "E", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertex"], "E");
    assert_eq!(
        json["neighbors"],
        serde_json::json!([
            {"vertex": "C", "weight": 4.0},
            {"vertex": "D", "weight": 1.0},
        ])
    );
}

#[test]
fn test_neighbors_unknown_vertex_json_error() {
    pathgraph()
        .args(["--format", "json", "neighbors", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"vertex_not_found\""));
}
