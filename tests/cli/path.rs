use crate::cli::support::{pathgraph, write_graph, SAMPLE_WITH_ISOLATED};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_sample_both_algorithms() {
    pathgraph()
        .args(["path", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs: A -> C -> E"))
        .stdout(predicate::str::contains("Path length: 2 hops, total weight: 10"))
        .stdout(predicate::str::contains("dijkstra: A -> B -> D -> E"))
        .stdout(predicate::str::contains("Path length: 3 hops, total weight: 9"));
}

#[test]
fn test_path_single_algorithm() {
    pathgraph()
        .args(["path", "A", "E", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs: A -> C -> E"))
        .stdout(predicate::str::contains("dijkstra").not());
}

#[test]
fn test_path_same_vertex() {
    pathgraph()
        .args(["path", "C", "C", "-a", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra: C\n"))
        .stdout(predicate::str::contains("Path length: 0 hops, total weight: 0"));
}

#[test]
fn test_path_quiet_omits_summary() {
    pathgraph()
        .args(["--quiet", "path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs: A -> B"))
        .stdout(predicate::str::contains("Path length").not());
}

#[test]
fn test_path_unknown_vertex() {
    pathgraph()
        .args(["path", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Z"));
}

#[test]
fn test_path_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), SAMPLE_WITH_ISOLATED);

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs: No path found from A to F"))
        .stdout(predicate::str::contains("dijkstra: No path found from A to F"));
}

#[test]
fn test_path_json() {
    let output = pathgraph()
        .args(["--format", "json", "path", "A", "E"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["algorithm"], "bfs");
    assert_eq!(results[0]["path"], serde_json::json!(["A", "C", "E"]));
    assert_eq!(results[0]["hops"], 2);

    assert_eq!(results[1]["algorithm"], "dijkstra");
    assert_eq!(results[1]["found"], true);
    assert_eq!(results[1]["path"], serde_json::json!(["A", "B", "D", "E"]));
    assert_eq!(results[1]["total_weight"], 9.0);
}

#[test]
fn test_path_json_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), SAMPLE_WITH_ISOLATED);

    let output = pathgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "path", "F", "A", "-a", "dijkstra"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["found"], false);
    assert_eq!(json[0]["path"], serde_json::json!([]));
    assert!(json[0].get("total_weight").is_none());
}

#[test]
fn test_path_uses_query_defaults() {
    let dir = tempdir().unwrap();
    let content = format!(
        "{}\n[query]\nfrom = \"B\"\nto = \"E\"\nalgorithm = \"dijkstra\"\n",
        SAMPLE_WITH_ISOLATED
    );
    let graph = write_graph(dir.path(), &content);

    pathgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra: B -> D -> E"))
        .stdout(predicate::str::contains("bfs").not());
}

#[test]
fn test_path_missing_source() {
    pathgraph()
        .arg("path")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing source vertex"));
}
