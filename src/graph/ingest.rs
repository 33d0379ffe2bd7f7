// src/graph/ingest.rs
//! Edge-list ingestion: identifier interning and adjacency building.

use std::io::{BufRead, ErrorKind};

use tracing::debug;

use super::adjacency::Adjacency;
use super::index::PageIndex;
use crate::error::{RankError, Result};

/// Immutable link graph over dense page indices.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    index: PageIndex,
    edges: Vec<(usize, usize)>,
    outlinks: Adjacency,
    inlinks: Adjacency,
    inlink_counts: Vec<u64>,
}

impl LinkGraph {
    /// Builds a graph from `source<TAB>target` lines.
    ///
    /// # Errors
    /// Returns `RankError::Parse` on the first malformed line.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ingester = GraphIngester::new();
        for (i, line) in lines.into_iter().enumerate() {
            ingester.push_line(i + 1, line.as_ref())?;
        }
        Ok(ingester.finish())
    }

    /// Builds a graph from an already decoded line stream.
    ///
    /// # Errors
    /// Returns `RankError::Io` if reading fails, `RankError::Parse` on a malformed line and
    /// `RankError::InvalidInput` on a line that is not UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut ingester = GraphIngester::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    RankError::InvalidInput(format!("line {}: not valid UTF-8", i + 1))
                }
                _ => RankError::from(e),
            })?;
            ingester.push_line(i + 1, &line)?;
        }
        Ok(ingester.finish())
    }

    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.index.len()
    }

    /// Raw edge count, duplicates included.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iteration domain of the engine: every page index, ascending.
    pub fn pages(&self) -> std::ops::Range<usize> {
        0..self.num_pages()
    }

    #[must_use]
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[must_use]
    pub fn outlinks(&self, page: usize) -> &[usize] {
        self.outlinks.neighbors(page)
    }

    #[must_use]
    pub fn inlinks(&self, page: usize) -> &[usize] {
        self.inlinks.neighbors(page)
    }

    #[must_use]
    pub fn out_degree(&self, page: usize) -> usize {
        self.outlinks.degree(page)
    }

    #[must_use]
    pub fn inlink_count(&self, page: usize) -> u64 {
        self.inlink_counts[page]
    }

    /// Multiplicity-preserving inlink counts, indexed by page.
    #[must_use]
    pub fn inlink_counts(&self) -> &[u64] {
        &self.inlink_counts
    }

    /// Pages without outgoing links, ascending.
    pub fn sinks(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages().filter(move |&p| self.out_degree(p) == 0)
    }
}

/// Incremental builder for a [`LinkGraph`].
#[derive(Debug, Default)]
pub struct GraphIngester {
    index: PageIndex,
    edges: Vec<(usize, usize)>,
    outlinks: Vec<Vec<usize>>,
    inlinks: Vec<Vec<usize>>,
    inlink_counts: Vec<u64>,
}

impl GraphIngester {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one `source<TAB>target` line. `line_no` is 1-based and only used for errors.
    ///
    /// # Errors
    /// Returns `RankError::Parse` unless the trimmed line has exactly two tab-separated fields.
    pub fn push_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let mut fields = line.trim().split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(source), Some(target), None) => {
                self.push_edge(source, target);
                Ok(())
            }
            _ => Err(RankError::Parse {
                line: line_no,
                content: line.to_string(),
            }),
        }
    }

    /// Records one raw edge. The source is interned before the target.
    pub fn push_edge(&mut self, source: &str, target: &str) {
        let s = self.index.intern(source);
        let t = self.index.intern(target);
        self.edges.push((s, t));
        self.grow(s.max(t) + 1);

        self.inlink_counts[t] += 1;
        self.inlinks[t].push(s);
        self.outlinks[s].push(t);
    }

    /// Registers a page that may have no edges at all.
    pub fn add_page(&mut self, id: &str) -> usize {
        let idx = self.index.intern(id);
        self.grow(idx + 1);
        idx
    }

    /// Back-fills every discovered page and freezes the adjacency.
    #[must_use]
    pub fn finish(mut self) -> LinkGraph {
        let n = self.index.len();
        self.grow(n);

        let graph = LinkGraph {
            index: self.index,
            edges: self.edges,
            outlinks: Adjacency::from_lists(self.outlinks),
            inlinks: Adjacency::from_lists(self.inlinks),
            inlink_counts: self.inlink_counts,
        };
        debug!(
            pages = graph.num_pages(),
            edges = graph.num_edges(),
            sinks = graph.sinks().count(),
            "link graph built"
        );
        graph
    }

    fn grow(&mut self, n: usize) {
        if self.inlink_counts.len() < n {
            self.outlinks.resize_with(n, Vec::new);
            self.inlinks.resize_with(n, Vec::new);
            self.inlink_counts.resize(n, 0);
        }
    }
}
