// src/pipeline.rs
//! One ranking job: ingest, rank, write both reports.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::graph::LinkGraph;
use crate::input;
use crate::rank::{RankVector, StopReason, Termination};
use crate::report;

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub pages: usize,
    pub edges: usize,
    pub sinks: usize,
    pub damping: f64,
    pub termination: Termination,
    pub iterations: usize,
    pub delta: Option<f64>,
    pub stop: StopReason,
    pub inlinks_output: PathBuf,
    pub inlinks_rows: usize,
    pub pagerank_output: PathBuf,
    pub pagerank_rows: usize,
    pub duration_ms: u128,
}

/// Runs the whole job described by `config`.
///
/// # Errors
/// Returns the first ingestion, ranking or output failure. Nothing is
/// written unless ranking succeeded.
pub fn run(config: &Config) -> Result<RunSummary> {
    let start = Instant::now();
    let engine = config.engine();
    engine.validate()?;

    let graph = input::load_graph(&config.input)?;
    info!(
        pages = graph.num_pages(),
        edges = graph.num_edges(),
        "ingested {}",
        config.input.display()
    );

    let ranks = engine.run(&graph)?;
    info!(iterations = ranks.iterations, stop = ?ranks.stop, "ranking complete");

    let (inlinks_rows, pagerank_rows) = write_reports(config, &graph, &ranks)?;

    Ok(RunSummary {
        input: config.input.clone(),
        pages: graph.num_pages(),
        edges: graph.num_edges(),
        sinks: graph.sinks().count(),
        damping: config.damping,
        termination: config.termination,
        iterations: ranks.iterations,
        delta: ranks.delta,
        stop: ranks.stop,
        inlinks_output: config.inlinks_output.clone(),
        inlinks_rows,
        pagerank_output: config.pagerank_output.clone(),
        pagerank_rows,
        duration_ms: start.elapsed().as_millis(),
    })
}

fn write_reports(config: &Config, graph: &LinkGraph, ranks: &RankVector) -> Result<(usize, usize)> {
    let index = graph.index();
    let inlinks = report::write_report(
        &config.inlinks_output,
        graph.inlink_counts(),
        index,
        config.top_k,
    )?;
    let pagerank = report::write_report(&config.pagerank_output, &ranks.scores, index, config.top_k)?;
    info!(
        inlinks = %config.inlinks_output.display(),
        pagerank = %config.pagerank_output.display(),
        rows = config.top_k.min(graph.num_pages()),
        "reports written"
    );
    Ok((inlinks, pagerank))
}
