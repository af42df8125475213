//! Vertex listing command
use crate::cli::{Cli, OutputFormat};
use pathgraph_core::error::Result;
use pathgraph_core::graph::Graph;

use super::label;

/// Execute the vertices command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    let labels: Vec<String> = graph
        .all_vertices()
        .into_iter()
        .map(|id| label(graph, id))
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&labels)?),
        OutputFormat::Human => {
            for name in &labels {
                println!("{}", name);
            }
            if !cli.quiet {
                println!();
                println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());
            }
        }
    }
    Ok(())
}
