use crate::cli::support::{pathgraph, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_graph_file() {
    let dir = tempdir().unwrap();

    pathgraph()
        .arg("--graph")
        .arg(dir.path().join("absent.toml"))
        .arg("vertices")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_malformed_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "vertices = [");

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("vertices")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "vertices = [\"A\", \"B\"]\n\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = -2.0\n",
    );

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge weight"));
}

#[test]
fn test_edge_to_unknown_vertex_is_ignored() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "vertices = [\"A\", \"B\"]\n\n[[edges]]\nfrom = \"A\"\nto = \"Q\"\nweight = 1.0\n",
    );

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "B", "-a", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs: No path found from A to B"));
}

#[test]
fn test_sample_output_round_trips() {
    let dir = tempdir().unwrap();
    let output = pathgraph().arg("sample").output().unwrap();
    assert!(output.status.success());

    let graph = write_graph(dir.path(), &String::from_utf8_lossy(&output.stdout));

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "E", "-a", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra: A -> B -> D -> E"));
}
