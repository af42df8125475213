//! Command dispatch logic for pathgraph
use std::time::Instant;

use clap::CommandFactory;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathgraph_core::config::GraphConfig;
use pathgraph_core::error::Result;
use pathgraph_core::trace_time;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Sample) => commands::sample::execute(cli),

        Some(Commands::Vertices) => {
            let config = load_config(cli, start)?;
            commands::vertices::execute(cli, &config.build()?)
        }

        Some(Commands::Neighbors { vertex }) => {
            let config = load_config(cli, start)?;
            commands::neighbors::execute(cli, &config.build()?, vertex)
        }

        Some(Commands::Path {
            from,
            to,
            algorithm,
        }) => {
            let config = load_config(cli, start)?;
            let graph = config.build()?;
            trace_time!(start, "build_graph");

            let query = config.query.clone().unwrap_or_default();
            let Some(from) = from.clone().or(query.from) else {
                pathgraph_core::bail_usage!("missing source vertex (pass FROM or set [query].from)");
            };
            let Some(to) = to.clone().or(query.to) else {
                pathgraph_core::bail_usage!("missing destination vertex (pass TO or set [query].to)");
            };
            let algorithm = algorithm.unwrap_or(query.algorithm);

            commands::path::execute(cli, &graph, &from, &to, algorithm, start)
        }
    }
}

fn handle_no_command() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Load the graph file named on the command line, or the sample graph
fn load_config(cli: &Cli, start: Instant) -> Result<GraphConfig> {
    let config = match &cli.graph {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading graph file");
            GraphConfig::load(path)?
        }
        None => GraphConfig::sample(),
    };
    trace_time!(start, "load_config");
    Ok(config)
}
