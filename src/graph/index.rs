// src/graph/index.rs
//! Dense page numbering over opaque identifiers.

use std::collections::HashMap;

/// Bidirectional mapping between page identifiers and dense indices.
///
/// Indices are handed out in first-seen order and are contiguous `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    ids: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl PageIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `id`, assigning the next free one on first sight.
    pub fn intern(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.lookup.get(id) {
            return idx;
        }
        let idx = self.ids.len();
        self.ids.push(id.to_string());
        self.lookup.insert(id.to_string(), idx);
        idx
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<usize> {
        self.lookup.get(id).copied()
    }

    /// Original identifier of a page, if the index is in range.
    #[must_use]
    pub fn id(&self, idx: usize) -> Option<&str> {
        self.ids.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in index order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
