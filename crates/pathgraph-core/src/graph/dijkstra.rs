use crate::graph::search::{PathSearch, SearchOutcome};
use crate::graph::types::{VertexId, Weight};
use crate::graph::Graph;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry for the min-heap (ordered by distance, then push order)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Weight,
    /// Push sequence number; earlier pushes win ties on distance
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: HashMap<VertexId, Weight>,
    predecessors: HashMap<VertexId, VertexId>,
    finalized: HashSet<VertexId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl DijkstraState {
    fn new<T>(graph: &Graph<T>, source: VertexId) -> Self {
        let mut distances: HashMap<VertexId, Weight> = graph
            .all_vertices()
            .into_iter()
            .map(|id| (id, Weight::INFINITY))
            .collect();
        distances.insert(source, Weight::ZERO);

        let mut state = Self {
            distances,
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.push(source, Weight::ZERO);
        state
    }

    fn push(&mut self, vertex: VertexId, distance: Weight) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn distance(&self, vertex: VertexId) -> Weight {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    fn into_outcome(self, reached: bool) -> SearchOutcome {
        SearchOutcome {
            reached,
            predecessors: self.predecessors,
        }
    }
}

/// Weighted shortest path using a binary-heap frontier.
///
/// Stale heap entries are skipped on extraction instead of being updated in
/// place. Relaxation requires a strict improvement, and equal distances are
/// extracted in push order, so the first-discovered of several equal-cost
/// routes is kept. Weights are assumed non-negative.
pub struct DijkstraSearch<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> DijkstraSearch<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }
}

impl<T> PathSearch for DijkstraSearch<'_, T> {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    #[tracing::instrument(skip_all, fields(source = %source, destination = %destination))]
    fn search(&self, source: VertexId, destination: VertexId) -> SearchOutcome {
        let mut state = DijkstraState::new(self.graph, source);

        while let Some(Reverse(HeapEntry {
            vertex: current,
            distance,
            ..
        })) = state.heap.pop()
        {
            if !state.finalized.insert(current) {
                tracing::trace!(vertex = %current, distance = %distance, "skip stale entry");
                continue;
            }

            if current == destination {
                tracing::debug!(
                    distance = %distance,
                    finalized = state.finalized.len(),
                    "destination reached"
                );
                return state.into_outcome(true);
            }

            let Some(vertex) = self.graph.vertex(current) else {
                continue;
            };

            for &neighbor in self.graph.adjacent_vertices(current) {
                let Some(edge_weight) = vertex.weight_to(neighbor) else {
                    continue;
                };
                let candidate = distance + edge_weight;

                if candidate < state.distance(neighbor) {
                    tracing::trace!(
                        from = %current,
                        to = %neighbor,
                        distance = %candidate,
                        "relaxed"
                    );
                    state.distances.insert(neighbor, candidate);
                    state.predecessors.insert(neighbor, current);
                    state.push(neighbor, candidate);
                }
            }
        }

        tracing::debug!(finalized = state.finalized.len(), "frontier exhausted");
        state.into_outcome(false)
    }

    fn path_weight(&self, path: &[VertexId]) -> Option<Weight> {
        self.graph.path_weight(path)
    }
}
