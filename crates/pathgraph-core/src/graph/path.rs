//! Path reconstruction shared by all search strategies

use crate::graph::types::VertexId;
use std::collections::HashMap;

/// Walk the predecessor mapping back from `destination` toward `source`.
///
/// The walk stops at `source` or at the first vertex with no recorded
/// predecessor. In the second case the result is a destination-anchored
/// fragment that does not start at `source`.
pub fn reconstruct_path(
    source: VertexId,
    destination: VertexId,
    predecessors: &HashMap<VertexId, VertexId>,
) -> Vec<VertexId> {
    let mut path = vec![destination];
    let mut current = destination;

    while current != source {
        match predecessors.get(&current) {
            Some(&pred) => {
                current = pred;
                path.push(current);
            }
            None => break,
        }
    }

    path.reverse();
    path
}
