use serde::Deserialize;
use std::path::PathBuf;

use crate::rank::pagerank::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS};
use crate::rank::Termination;

/// Resolved settings for one ranking run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub damping: f64,
    pub termination: Termination,
    pub inlinks_output: PathBuf,
    pub pagerank_output: PathBuf,
    pub top_k: usize,
    /// Convergence safety cap; `None` disables it.
    pub max_iterations: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            damping: DEFAULT_DAMPING,
            termination: Termination::default(),
            inlinks_output: default_inlinks_output(),
            pagerank_output: default_pagerank_output(),
            top_k: default_top_k(),
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

fn default_input() -> PathBuf { PathBuf::from("links.srt.gz") }
fn default_inlinks_output() -> PathBuf { PathBuf::from("inlinks.txt") }
fn default_pagerank_output() -> PathBuf { PathBuf::from("pagerank.txt") }
const fn default_top_k() -> usize { 100 }

/// On-disk layout of `linkrank.toml`. Every key is optional.
///
/// ```toml
/// input = "links.srt.gz"
/// damping = 0.2
/// tolerance = 0.005      # or: iterations = 50
/// inlinks_output = "inlinks.txt"
/// pagerank_output = "pagerank.txt"
/// top_k = 100
/// max_iterations = 10000 # 0 disables the cap
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkRankToml {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub damping: Option<f64>,
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default)]
    pub inlinks_output: Option<PathBuf>,
    #[serde(default)]
    pub pagerank_output: Option<PathBuf>,
    #[serde(default)]
    pub top_k: Option<i64>,
    #[serde(default)]
    pub max_iterations: Option<usize>,
}
