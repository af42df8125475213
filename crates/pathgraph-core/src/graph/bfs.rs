use crate::graph::search::{PathSearch, SearchOutcome};
use crate::graph::types::{VertexId, Weight};
use crate::graph::Graph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Unweighted shortest path by hop count.
///
/// Neighbors are expanded in adjacency insertion order, so among several
/// minimum-hop paths the one through earlier-inserted edges wins.
pub struct BreadthFirstSearch<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> BreadthFirstSearch<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }
}

impl<T> PathSearch for BreadthFirstSearch<'_, T> {
    fn name(&self) -> &'static str {
        "bfs"
    }

    #[tracing::instrument(skip_all, fields(source = %source, destination = %destination))]
    fn search(&self, source: VertexId, destination: VertexId) -> SearchOutcome {
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        queue.push_back(source);
        visited.insert(source);

        while let Some(current) = queue.pop_front() {
            if current == destination {
                tracing::debug!(visited = visited.len(), "destination reached");
                return SearchOutcome {
                    reached: true,
                    predecessors,
                };
            }

            for &neighbor in self.graph.adjacent_vertices(current) {
                if !visited.insert(neighbor) {
                    continue;
                }
                tracing::trace!(from = %current, to = %neighbor, "discovered");
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }

        tracing::debug!(visited = visited.len(), "frontier exhausted");
        SearchOutcome {
            reached: false,
            predecessors,
        }
    }

    fn path_weight(&self, path: &[VertexId]) -> Option<Weight> {
        self.graph.path_weight(path)
    }
}
