//! Graph configuration for pathgraph
//!
//! A graph is described in TOML as a list of vertex labels plus an array of
//! `[[edges]]` tables, with an optional `[query]` section.

pub mod types;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

pub use types::{EdgeConfig, GraphConfig, QueryConfig};

impl GraphConfig {
    /// The built-in five-vertex sample graph
    pub fn sample() -> Self {
        Self {
            vertices: ["A", "B", "C", "D", "E"]
                .into_iter()
                .map(String::from)
                .collect(),
            edges: vec![
                EdgeConfig::new("A", "B", 5.0),
                EdgeConfig::new("A", "C", 6.0),
                EdgeConfig::new("B", "D", 3.0),
                EdgeConfig::new("C", "D", 2.0),
                EdgeConfig::new("C", "E", 4.0),
                EdgeConfig::new("D", "E", 1.0),
            ],
            query: None,
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Build the described graph.
    ///
    /// Edges naming an unknown label are skipped with a warning. Duplicate
    /// labels and negative or non-finite weights are rejected.
    pub fn build(&self) -> Result<Graph<String>> {
        let mut graph = Graph::new();
        let mut ids: HashMap<&str, VertexId> = HashMap::new();

        for label in &self.vertices {
            if ids.contains_key(label.as_str()) {
                return Err(GraphError::DuplicateVertex {
                    label: label.clone(),
                });
            }
            ids.insert(label.as_str(), graph.insert_vertex(label.clone()));
        }

        for edge in &self.edges {
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                bail_invalid!(
                    "edge weight",
                    format!("{} ({} - {})", edge.weight, edge.from, edge.to)
                );
            }

            match (ids.get(edge.from.as_str()), ids.get(edge.to.as_str())) {
                (Some(&from), Some(&to)) => {
                    graph.add_edge(from, to, Weight::new(edge.weight));
                }
                _ => {
                    tracing::warn!(
                        from = %edge.from,
                        to = %edge.to,
                        "skipping edge with unknown endpoint"
                    );
                }
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }
}

/// Resolve a vertex label against a built graph
pub fn resolve_label(graph: &Graph<String>, label: &str) -> Result<VertexId> {
    graph
        .find_vertex(&label.to_string())
        .ok_or_else(|| GraphError::vertex_not_found(label))
}
