use crate::error::GraphError;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{PathResult, VertexId, Weight};
use crate::graph::{BreadthFirstSearch, DijkstraSearch, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Raw output of a search: whether the destination was reached and the
/// predecessor of every vertex discovered along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub reached: bool,
    pub predecessors: HashMap<VertexId, VertexId>,
}

/// Trait for shortest-path strategies bound to a graph
pub trait PathSearch {
    /// Short identifier used in logs and output
    fn name(&self) -> &'static str;

    /// Run the traversal from `source` until `destination` is settled or
    /// the frontier is exhausted
    fn search(&self, source: VertexId, destination: VertexId) -> SearchOutcome;

    /// Sum of edge weights along `path`, if every hop is an edge
    fn path_weight(&self, path: &[VertexId]) -> Option<Weight>;

    /// Ordered path from `source` to `destination`.
    ///
    /// An unreachable destination is not reported as such: the result is
    /// the fragment reconstructed back from `destination`, typically just
    /// `[destination]`. Use [`PathSearch::find_path`] to tell the cases apart.
    fn get_path(&self, source: VertexId, destination: VertexId) -> Vec<VertexId> {
        let outcome = self.search(source, destination);
        reconstruct_path(source, destination, &outcome.predecessors)
    }

    /// Like [`PathSearch::get_path`], with an explicit `found` flag
    fn find_path(&self, source: VertexId, destination: VertexId) -> PathResult {
        let outcome = self.search(source, destination);
        let path = if outcome.reached {
            reconstruct_path(source, destination, &outcome.predecessors)
        } else {
            Vec::new()
        };
        let total_weight = if outcome.reached {
            self.path_weight(&path)
        } else {
            None
        };

        PathResult {
            algorithm: self.name(),
            source,
            destination,
            found: outcome.reached,
            hops: path.len().saturating_sub(1),
            path,
            total_weight,
        }
    }
}

/// Which search strategies to run for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    /// BFS followed by Dijkstra
    #[default]
    Both,
}

impl Algorithm {
    /// Instantiate the selected strategies over `graph`
    pub fn searches<'g, T>(&self, graph: &'g Graph<T>) -> Vec<Box<dyn PathSearch + 'g>> {
        match self {
            Algorithm::Bfs => vec![Box::new(BreadthFirstSearch::new(graph))],
            Algorithm::Dijkstra => vec![Box::new(DijkstraSearch::new(graph))],
            Algorithm::Both => vec![
                Box::new(BreadthFirstSearch::new(graph)),
                Box::new(DijkstraSearch::new(graph)),
            ],
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "both" => Ok(Algorithm::Both),
            other => Err(GraphError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Both => write!(f, "both"),
        }
    }
}
