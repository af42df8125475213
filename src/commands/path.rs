//! Path command
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathgraph_core::config::resolve_label;
use pathgraph_core::error::Result;
use pathgraph_core::graph::{Algorithm, Graph, PathResult, Weight};
use pathgraph_core::trace_time;

use super::label;

/// A path result with vertex labels resolved for output
#[derive(Debug, Serialize)]
struct PathOutput {
    algorithm: &'static str,
    from: String,
    to: String,
    found: bool,
    path: Vec<String>,
    hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_weight: Option<Weight>,
}

impl PathOutput {
    fn new(graph: &Graph<String>, result: &PathResult) -> Self {
        Self {
            algorithm: result.algorithm,
            from: label(graph, result.source),
            to: label(graph, result.destination),
            found: result.found,
            path: result.path.iter().map(|id| label(graph, *id)).collect(),
            hops: result.hops,
            total_weight: result.total_weight,
        }
    }
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    from: &str,
    to: &str,
    algorithm: Algorithm,
    start: Instant,
) -> Result<()> {
    let source = resolve_label(graph, from)?;
    let destination = resolve_label(graph, to)?;

    let outputs: Vec<PathOutput> = algorithm
        .searches(graph)
        .iter()
        .map(|search| {
            let result = search.find_path(source, destination);
            trace_time!(start, "search", algorithm = search.name());
            PathOutput::new(graph, &result)
        })
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
        OutputFormat::Human => {
            for output in &outputs {
                output_path_human(cli, output);
            }
        }
    }
    Ok(())
}

fn output_path_human(cli: &Cli, output: &PathOutput) {
    if !output.found {
        println!(
            "{}: No path found from {} to {}",
            output.algorithm, output.from, output.to
        );
        return;
    }

    println!("{}: {}", output.algorithm, output.path.join(" -> "));
    if !cli.quiet {
        let unit = if output.hops == 1 { "hop" } else { "hops" };
        match output.total_weight {
            Some(weight) => println!(
                "  Path length: {} {}, total weight: {}",
                output.hops, unit, weight
            ),
            None => println!("  Path length: {} {}", output.hops, unit),
        }
    }
}
