//! Configuration type definitions

use crate::graph::Algorithm;
use serde::{Deserialize, Serialize};

/// Graph description: vertex labels, undirected weighted edges and an
/// optional default query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Vertex labels, registered in list order
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Undirected edges between labels
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,

    /// Default source/destination used when the CLI does not name them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryConfig>,
}

/// A single undirected edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeConfig {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Default query parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default)]
    pub algorithm: Algorithm,
}
