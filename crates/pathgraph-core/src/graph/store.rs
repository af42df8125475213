//! Undirected weighted graph backed by a vertex arena

use crate::graph::types::{VertexId, Weight};
use crate::graph::vertex::Vertex;
use std::collections::HashMap;

/// An undirected weighted graph.
///
/// Vertices live in an arena and are addressed by [`VertexId`]. Allocating a
/// vertex does not register it: only registered vertices own an adjacency
/// list and can take part in edges.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a vertex in the arena without registering it
    pub fn create_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(data));
        id
    }

    /// Register a vertex, resetting its adjacency list.
    ///
    /// Returns `false` if `id` was not allocated by this graph.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if id.index() >= self.vertices.len() {
            tracing::debug!(vertex = %id, "add_vertex ignored: id not in arena");
            return false;
        }
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Allocate and register a vertex in one step
    pub fn insert_vertex(&mut self, data: T) -> VertexId {
        let id = self.create_vertex(data);
        self.adjacency.insert(id, Vec::new());
        id
    }

    /// Add an undirected edge between two registered vertices.
    ///
    /// Silently does nothing (returns `false`) when either endpoint is not
    /// registered. Re-adding a pair overwrites the weight but appends another
    /// adjacency entry on each side.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: Weight) -> bool {
        if !self.contains(source) || !self.contains(destination) {
            tracing::debug!(
                source = %source,
                destination = %destination,
                "add_edge ignored: unregistered endpoint"
            );
            return false;
        }

        self.vertices[source.index()].add_adjacent_vertex(destination, weight);
        self.vertices[destination.index()].add_adjacent_vertex(source, weight);

        if let Some(list) = self.adjacency.get_mut(&source) {
            list.push(destination);
        }
        if let Some(list) = self.adjacency.get_mut(&destination) {
            list.push(source);
        }

        self.edge_count += 1;
        true
    }

    /// Ordered adjacency list of `id`; empty for unregistered vertices
    pub fn adjacent_vertices(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All registered vertices in ascending id order
    pub fn all_vertices(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.adjacency.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    pub fn data(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::data)
    }

    /// Number of registered vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of `add_edge` calls that took effect
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edge_weight(&self, source: VertexId, destination: VertexId) -> Option<Weight> {
        self.vertex(source)?.weight_to(destination)
    }

    /// Sum of edge weights along `path`, or `None` if a hop is not an edge
    pub fn path_weight(&self, path: &[VertexId]) -> Option<Weight> {
        path.windows(2).try_fold(Weight::ZERO, |total, hop| {
            self.edge_weight(hop[0], hop[1]).map(|w| total + w)
        })
    }
}

impl<T: PartialEq> Graph<T> {
    /// First registered vertex whose payload equals `data`
    pub fn find_vertex(&self, data: &T) -> Option<VertexId> {
        self.all_vertices()
            .into_iter()
            .find(|id| self.data(*id) == Some(data))
    }
}
