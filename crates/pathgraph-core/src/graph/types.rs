use serde::Serialize;
use std::fmt;

/// Handle to a vertex in a [`Graph`](crate::graph::Graph) arena.
///
/// Identity is the arena slot, not the payload: two vertices carrying
/// equal data are still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Weight of an undirected edge, or an accumulated path distance.
///
/// Expected to be non-negative; the graph does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over weights, usable where `Ord` is required
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(f64::from(weight))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a path search with an explicit reachability flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub algorithm: &'static str,
    pub source: VertexId,
    pub destination: VertexId,
    pub found: bool,
    /// Vertices from source to destination inclusive; empty when not found
    pub path: Vec<VertexId>,
    /// Number of edges on the path
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<Weight>,
}
