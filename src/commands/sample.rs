//! Sample graph command
use crate::cli::{Cli, OutputFormat};
use pathgraph_core::config::GraphConfig;
use pathgraph_core::error::Result;

/// Execute the sample command
pub fn execute(cli: &Cli) -> Result<()> {
    let config = GraphConfig::sample();
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Human => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}
