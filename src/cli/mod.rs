//! CLI argument parsing for pathgraph
//!
//! Supports global flags: --graph, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use pathgraph_core::format::OutputFormat;
use pathgraph_core::graph::Algorithm;
use parse::{parse_algorithm, parse_format};

/// Pathgraph - shortest paths over small weighted graphs
#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph description file (TOML); the built-in sample graph is used when omitted
    #[arg(long, global = true, env = "PATHGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `pathgraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two vertices
    Path {
        /// Source vertex label (defaults to [query].from in the graph file)
        from: Option<String>,

        /// Destination vertex label (defaults to [query].to in the graph file)
        to: Option<String>,

        /// Search strategy: bfs, dijkstra, or both
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },

    /// List the neighbors of a vertex with edge weights
    Neighbors {
        /// Vertex label
        vertex: String,
    },

    /// List all vertices
    Vertices,

    /// Print the built-in sample graph as TOML
    Sample,
}
