// src/rank/pagerank.rs
//! `PageRank` power iteration with uniform sink redistribution.

use tracing::{debug, trace, warn};

use super::{RankVector, StopReason, Termination};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

pub const DEFAULT_DAMPING: f64 = 0.20;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Damped power-iteration engine.
///
/// `damping` is the random-jump probability: each round a page keeps
/// `damping / n` for itself and passes `1 - damping` of its mass along its
/// outlinks. Pages without outlinks spread that share over every page.
#[derive(Debug, Clone)]
pub struct PageRank {
    pub damping: f64,
    pub termination: Termination,
    /// Upper bound on convergence-mode rounds; `None` iterates until converged.
    pub max_iterations: Option<usize>,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            termination: Termination::default(),
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl PageRank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Sets the convergence safety cap. `Some(0)` is treated as no cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations.filter(|&cap| cap > 0);
        self
    }

    /// Checks the parameters without touching a graph.
    ///
    /// # Errors
    /// Returns `RankError::Config` if damping is outside `(0, 1)` or the tolerance is not positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::Config(format!(
                "damping must lie in (0, 1), got {}",
                self.damping
            )));
        }
        self.termination.validate()?;
        Ok(())
    }

    /// Ranks every page of `graph`.
    ///
    /// # Errors
    /// Returns `RankError::InvalidInput` for an empty graph and
    /// `RankError::Config` for invalid parameters.
    #[allow(clippy::cast_precision_loss)]
    pub fn run(&self, graph: &LinkGraph) -> Result<RankVector> {
        self.validate()?;
        let n = graph.num_pages();
        if n == 0 {
            return Err(RankError::InvalidInput(
                "cannot rank an empty graph".to_string(),
            ));
        }

        let mut current = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        let result = match self.termination {
            Termination::Exactly(0) => {
                RankVector::new(current, 0, None, StopReason::IterationCount)
            }
            Termination::Exactly(count) => {
                let mut delta = 0.0;
                for round in 1..=count {
                    delta = self.step(graph, &current, &mut next);
                    trace!(round, delta, "pagerank iteration");
                    std::mem::swap(&mut current, &mut next);
                }
                RankVector::new(current, count, Some(delta), StopReason::IterationCount)
            }
            Termination::Converge { tolerance } => {
                self.converge(graph, tolerance, current, next)
            }
        };

        debug!(
            iterations = result.iterations,
            delta = ?result.delta,
            stop = ?result.stop,
            "pagerank finished"
        );
        Ok(result)
    }

    fn converge(
        &self,
        graph: &LinkGraph,
        tolerance: f64,
        mut current: Vec<f64>,
        mut next: Vec<f64>,
    ) -> RankVector {
        let mut iterations = 0;
        loop {
            iterations += 1;
            let delta = self.step(graph, &current, &mut next);
            trace!(round = iterations, delta, "pagerank iteration");
            std::mem::swap(&mut current, &mut next);

            if delta < tolerance {
                return RankVector::new(current, iterations, Some(delta), StopReason::Converged);
            }
            if self.max_iterations.is_some_and(|cap| iterations >= cap) {
                warn!(
                    iterations,
                    delta, tolerance, "pagerank stopped at iteration cap before converging"
                );
                return RankVector::new(current, iterations, Some(delta), StopReason::IterationCap);
            }
        }
    }

    /// Computes one round into `next` and returns its L2 distance from `current`.
    ///
    /// Pages and their inlinks are visited in ascending index order so the
    /// floating-point summation order is fixed.
    #[allow(clippy::cast_precision_loss)]
    fn step(&self, graph: &LinkGraph, current: &[f64], next: &mut [f64]) -> f64 {
        let n = current.len() as f64;
        let follow = 1.0 - self.damping;
        let teleport = self.damping / n;
        let mut sink_mass = 0.0;

        for page in graph.pages() {
            let mut rank = teleport;
            for &source in graph.inlinks(page) {
                rank += follow * current[source] / graph.out_degree(source) as f64;
            }
            next[page] = rank;

            if graph.out_degree(page) == 0 {
                sink_mass += follow * current[page] / n;
            }
        }

        for rank in next.iter_mut() {
            *rank += sink_mass;
        }

        l2_distance(next, current)
    }
}

fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
