//! Pathgraph Core Library
//!
//! In-memory undirected weighted graphs with BFS and Dijkstra path search.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
