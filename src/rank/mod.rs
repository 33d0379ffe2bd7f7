// src/rank/mod.rs
//! PageRank computation over a [`LinkGraph`](crate::graph::LinkGraph).

pub mod pagerank;
pub mod termination;

pub use pagerank::PageRank;
pub use termination::Termination;

use serde::Serialize;

/// Why the power iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Successive vectors came closer than the tolerance.
    Converged,
    /// The requested number of iterations ran.
    IterationCount,
    /// Convergence mode hit the safety cap first.
    IterationCap,
}

/// Final rank vector of a run plus its diagnostics.
#[derive(Debug, Clone)]
pub struct RankVector {
    /// Scores indexed by page; they sum to 1.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// L2 distance between the last two vectors, if any iteration ran.
    pub delta: Option<f64>,
    pub stop: StopReason,
}

impl RankVector {
    #[must_use]
    pub fn new(scores: Vec<f64>, iterations: usize, delta: Option<f64>, stop: StopReason) -> Self {
        Self {
            scores,
            iterations,
            delta,
            stop,
        }
    }

    /// Score of a page, `0.0` when out of range.
    #[must_use]
    pub fn score(&self, page: usize) -> f64 {
        self.scores.get(page).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}
