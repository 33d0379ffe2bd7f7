// src/graph/mod.rs
//! Link graph construction from edge lists.

pub mod adjacency;
pub mod index;
pub mod ingest;

pub use adjacency::Adjacency;
pub use index::PageIndex;
pub use ingest::{GraphIngester, LinkGraph};
