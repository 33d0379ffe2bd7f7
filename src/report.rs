// src/report.rs
//! Top-k report writing for per-page metrics.
//!
//! Both reports share one ordering: metric descending, then identifier
//! ascending. Rows are `identifier<TAB>position<TAB>metric`.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::PageIndex;

/// A per-page value that can be ranked and rendered in a report.
pub trait Metric: Copy {
    /// Orders larger values first.
    fn cmp_desc(&self, other: &Self) -> Ordering;

    /// Text written in the metric column.
    fn render(&self) -> String;
}

impl Metric for u64 {
    fn cmp_desc(&self, other: &Self) -> Ordering {
        other.cmp(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Metric for f64 {
    fn cmp_desc(&self, other: &Self) -> Ordering {
        other.partial_cmp(self).unwrap_or(Ordering::Equal)
    }

    fn render(&self) -> String {
        format!("{self:.12}")
    }
}

/// One line of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow<'a, M> {
    pub id: &'a str,
    /// 1-based rank position.
    pub position: usize,
    pub value: M,
}

/// Selects the `k` best pages by `values`.
///
/// `values` is indexed by page. Ties are broken by identifier, ascending.
/// Asking for more rows than there are pages returns every page.
#[must_use]
pub fn top_k<'a, M: Metric>(values: &[M], index: &'a PageIndex, k: usize) -> Vec<RankedRow<'a, M>> {
    let mut entries: Vec<(&'a str, M)> = index.ids().zip(values.iter().copied()).collect();
    entries.sort_by(|a, b| a.1.cmp_desc(&b.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(k);

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (id, value))| RankedRow {
            id,
            position: i + 1,
            value,
        })
        .collect()
}

/// Writes rows as tab-separated lines.
///
/// # Errors
/// Propagates write failures.
pub fn write_rows<W: Write, M: Metric>(mut out: W, rows: &[RankedRow<'_, M>]) -> std::io::Result<()> {
    for row in rows {
        writeln!(out, "{}\t{}\t{}", row.id, row.position, row.value.render())?;
    }
    out.flush()
}

/// Ranks `values` and writes the top `k` rows to `path`, replacing any existing file.
///
/// # Errors
/// Returns `RankError::Io` if the file cannot be created or written.
pub fn write_report<M: Metric>(
    path: &Path,
    values: &[M],
    index: &PageIndex,
    k: usize,
) -> Result<usize> {
    let rows = top_k(values, index, k);
    let file = File::create(path).map_err(|e| RankError::io(path, e))?;
    write_rows(BufWriter::new(file), &rows).map_err(|e| RankError::io(path, e))?;
    Ok(rows.len())
}
