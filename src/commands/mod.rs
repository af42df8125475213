//! Command implementations for pathgraph

pub mod dispatch;
pub mod neighbors;
pub mod path;
pub mod sample;
pub mod vertices;

use pathgraph_core::graph::{Graph, VertexId};

/// Label of a vertex for display, falling back to its arena id
pub(crate) fn label(graph: &Graph<String>, id: VertexId) -> String {
    graph.data(id).cloned().unwrap_or_else(|| id.to_string())
}
