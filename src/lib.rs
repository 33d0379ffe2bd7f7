pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod input;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod reporting;
