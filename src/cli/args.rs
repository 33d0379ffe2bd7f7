use clap::Parser;
use std::path::PathBuf;

use crate::rank::Termination;

/// Positional arguments follow the batch-job calling convention
/// `INPUT LAMBDA STOP INLINKS_FILE PAGERANK_FILE K`; any suffix may be omitted.
#[derive(Parser, Debug)]
#[command(
    name = "linkrank",
    version,
    about = "Rank pages of a link graph by inlinks and PageRank"
)]
pub struct Cli {
    /// Edge list with one `source<TAB>target` per line, gzip or plain [default: links.srt.gz]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Random-jump probability in (0, 1) [default: 0.2]
    #[arg(value_name = "LAMBDA", allow_negative_numbers = true)]
    pub damping: Option<f64>,

    /// Convergence tolerance, or "exactly N" for a fixed iteration count [default: 0.005]
    #[arg(value_name = "STOP")]
    pub stop: Option<Termination>,

    /// Inlink-count report path [default: inlinks.txt]
    #[arg(value_name = "INLINKS_FILE")]
    pub inlinks_output: Option<PathBuf>,

    /// PageRank report path [default: pagerank.txt]
    #[arg(value_name = "PAGERANK_FILE")]
    pub pagerank_output: Option<PathBuf>,

    /// Number of rows per report; negative values write empty reports [default: 100]
    #[arg(value_name = "K", allow_negative_numbers = true)]
    pub top_k: Option<i64>,

    /// TOML config file [default: ./linkrank.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Safety cap on convergence iterations, 0 for none [default: 10000]
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress the run summary
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
