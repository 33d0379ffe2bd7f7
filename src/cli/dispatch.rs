//! Turns parsed arguments into a ranking run.

use super::args::Cli;
use crate::config::{self, Config};
use crate::exit::LinkRankExit;
use crate::pipeline;
use crate::reporting;
use anyhow::{Context, Result};

/// Executes the parsed command.
///
/// # Errors
/// Returns error if configuration is invalid or the run fails.
pub fn execute(cli: &Cli) -> Result<LinkRankExit> {
    let config = resolve_config(cli)?;
    let summary = pipeline::run(&config)
        .with_context(|| format!("ranking {} failed", config.input.display()))?;

    if cli.json {
        reporting::print_json(&summary)?;
    } else if !cli.quiet {
        reporting::print_summary(&summary);
    }
    Ok(LinkRankExit::Success)
}

/// Layers command-line values over the config file and defaults.
///
/// # Errors
/// Returns error if the config file is unreadable or the result is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    if let Some(input) = &cli.input {
        config.input.clone_from(input);
    }
    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(stop) = cli.stop {
        config.termination = stop;
    }
    if let Some(path) = &cli.inlinks_output {
        config.inlinks_output.clone_from(path);
    }
    if let Some(path) = &cli.pagerank_output {
        config.pagerank_output.clone_from(path);
    }
    if let Some(k) = cli.top_k {
        config.top_k = config::clamp_top_k(k);
    }
    if let Some(cap) = cli.max_iterations {
        config.set_max_iterations(cap);
    }

    config.validate()?;
    Ok(config)
}
