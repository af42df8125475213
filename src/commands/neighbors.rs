//! Neighbor listing command
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathgraph_core::config::resolve_label;
use pathgraph_core::error::Result;
use pathgraph_core::graph::{Graph, Weight};

use super::label;

#[derive(Debug, Serialize)]
struct NeighborEntry {
    vertex: String,
    weight: Option<Weight>,
}

/// Execute the neighbors command.
///
/// Entries follow adjacency insertion order; an edge added twice is listed
/// twice.
pub fn execute(cli: &Cli, graph: &Graph<String>, vertex: &str) -> Result<()> {
    let id = resolve_label(graph, vertex)?;
    let entries: Vec<NeighborEntry> = graph
        .adjacent_vertices(id)
        .iter()
        .map(|&neighbor| NeighborEntry {
            vertex: label(graph, neighbor),
            weight: graph.edge_weight(id, neighbor),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "vertex": vertex,
                "neighbors": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No neighbors for {}", vertex);
                }
                return Ok(());
            }
            for entry in &entries {
                match entry.weight {
                    Some(weight) => println!("{} -> {} ({})", vertex, entry.vertex, weight),
                    None => println!("{} -> {}", vertex, entry.vertex),
                }
            }
        }
    }
    Ok(())
}
