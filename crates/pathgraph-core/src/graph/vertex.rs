//! Vertex payload and weighted adjacency

use crate::graph::types::{VertexId, Weight};
use std::collections::HashMap;

/// A graph vertex: an immutable payload plus weights toward its neighbors.
///
/// Only the local side of an edge is stored here. Keeping both endpoints
/// in sync is the job of [`Graph::add_edge`](crate::graph::Graph::add_edge).
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    data: T,
    adjacent: HashMap<VertexId, Weight>,
}

impl<T> Vertex<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            adjacent: HashMap::new(),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Insert or overwrite the weight toward `destination`
    pub fn add_adjacent_vertex(&mut self, destination: VertexId, weight: Weight) {
        self.adjacent.insert(destination, weight);
    }

    pub fn adjacent_vertices(&self) -> &HashMap<VertexId, Weight> {
        &self.adjacent
    }

    pub fn weight_to(&self, neighbor: VertexId) -> Option<Weight> {
        self.adjacent.get(&neighbor).copied()
    }
}
