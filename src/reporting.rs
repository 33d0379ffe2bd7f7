//! Console output for finished runs.

use crate::pipeline::RunSummary;
use crate::rank::StopReason;
use anyhow::Result;
use colored::Colorize;

/// Prints the human-readable run summary on stderr.
pub fn print_summary(summary: &RunSummary) {
    eprintln!();
    eprintln!("{}", "─".repeat(60).dimmed());
    eprintln!("{}", " LINKRANK".bold());
    eprintln!("{}", "─".repeat(60).dimmed());
    eprintln!();

    eprintln!("  {} {}", "Input:".white(), summary.input.display());
    eprintln!("  {} {}", "Pages:".white(), format_num(summary.pages));
    eprintln!("  {} {}", "Edges:".white(), format_num(summary.edges));
    eprintln!("  {} {}", "Sinks:".white(), format_num(summary.sinks));
    eprintln!("  {} {}", "Damping:".white(), summary.damping);
    eprintln!("  {} {}", "Mode:".white(), summary.termination);
    eprintln!("  {} {}", "Status:".white(), status_line(summary));
    eprintln!();
    eprintln!(
        "  {} {} ({} rows)",
        "Inlinks:".white(),
        summary.inlinks_output.display(),
        summary.inlinks_rows
    );
    eprintln!(
        "  {} {} ({} rows)",
        "PageRank:".white(),
        summary.pagerank_output.display(),
        summary.pagerank_rows
    );
    eprintln!("  {} {}", "Duration:".white(), format_duration(summary.duration_ms));

    eprintln!();
    eprintln!("{}", "─".repeat(60).dimmed());
}

fn status_line(summary: &RunSummary) -> String {
    let delta = summary
        .delta
        .map_or_else(|| "n/a".to_string(), |d| format!("{d:.3e}"));
    match summary.stop {
        StopReason::Converged => format!(
            "converged after {} iterations (delta {delta})",
            summary.iterations
        )
        .green()
        .to_string(),
        StopReason::IterationCount => {
            format!("ran {} iterations (delta {delta})", summary.iterations)
                .green()
                .to_string()
        }
        StopReason::IterationCap => format!(
            "stopped at iteration cap {} without converging (delta {delta})",
            summary.iterations
        )
        .yellow()
        .to_string(),
    }
}

/// Prints any serializable value as pretty JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn format_duration(ms: u128) -> String {
    format!("{:.2}s", (ms as f64) / 1000.0)
}

#[allow(clippy::cast_precision_loss)]
fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", (n as f64) / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", (n as f64) / 1_000.0)
    } else {
        n.to_string()
    }
}
