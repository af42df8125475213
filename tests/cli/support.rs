use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

/// Get a Command for pathgraph
pub fn pathgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("pathgraph");
    cmd.env_remove("PATHGRAPH_GRAPH")
        .env_remove("PATHGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("graph.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Sample graph plus an isolated vertex F
pub const SAMPLE_WITH_ISOLATED: &str = r#"
vertices = ["A", "B", "C", "D", "E", "F"]

[[edges]]
from = "A"
to = "B"
weight = 5.0

[[edges]]
from = "A"
to = "C"
weight = 6.0

[[edges]]
from = "B"
to = "D"
weight = 3.0

[[edges]]
from = "C"
to = "D"
weight = 2.0

[[edges]]
from = "C"
to = "E"
weight = 4.0

[[edges]]
from = "D"
to = "E"
weight = 1.0
"#;
