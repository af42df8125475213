//! Graph storage and shortest-path search
//!
//! Provides the undirected weighted graph and the path-finding strategies
//! that run over it:
//! - BFS for shortest paths by hop count
//! - Dijkstra for weighted shortest paths
//! - `PathSearch` trait shared by both

pub mod bfs;
pub mod dijkstra;
pub mod path;
pub mod search;
pub mod store;
pub mod types;
pub mod vertex;

pub use bfs::BreadthFirstSearch;
pub use dijkstra::DijkstraSearch;
pub use path::reconstruct_path;
pub use search::{Algorithm, PathSearch, SearchOutcome};
pub use store::Graph;
pub use types::{PathResult, VertexId, Weight};
pub use vertex::Vertex;
