// src/input.rs
//! Opening edge-list files, gzip-compressed or plain.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens `path` for line reading, decompressing when it starts with the gzip magic bytes.
///
/// # Errors
/// Returns `RankError::Io` if the file cannot be opened or peeked.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| RankError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let gzipped = reader
        .fill_buf()
        .map_err(|e| RankError::io(path, e))?
        .starts_with(&GZIP_MAGIC);

    debug!(path = %path.display(), gzipped, "opened edge list");
    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Reads and ingests the edge list at `path`.
///
/// # Errors
/// Returns `RankError::Io` for read or decompression failures, `RankError::Parse` for malformed
/// lines and `RankError::InvalidInput` for text that is not UTF-8.
pub fn load_graph(path: &Path) -> Result<LinkGraph> {
    LinkGraph::from_reader(open(path)?).map_err(|e| match e {
        RankError::Io { source, .. } => RankError::io(path, source),
        other => other,
    })
}
