// src/graph/adjacency.rs
//! Compressed sparse row storage for one direction of the link graph.

/// Distinct neighbours per page, each list sorted ascending.
///
/// `targets[offsets[p]..offsets[p + 1]]` holds the neighbours of page `p`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Adjacency {
    /// Builds the CSR layout from per-page neighbour lists.
    ///
    /// Lists may contain duplicates and arrive in any order; both are
    /// normalised here so that iteration order never depends on input order.
    #[must_use]
    pub fn from_lists(lists: Vec<Vec<usize>>) -> Self {
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut targets = Vec::new();
        offsets.push(0);

        for mut neighbours in lists {
            neighbours.sort_unstable();
            neighbours.dedup();
            targets.extend(neighbours);
            offsets.push(targets.len());
        }

        Self { offsets, targets }
    }

    /// Number of pages covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.targets[self.offsets[idx]..self.offsets[idx + 1]]
    }

    #[must_use]
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }
}
