//! Property-based tests for ranking invariants.
//!
//! These hold for any edge list:
//! - Rank mass sums to one after every iteration
//! - Convergence runs are reproducible
//! - Inlink counts add up to the number of raw edges

use linkrank_core::graph::LinkGraph;
use linkrank_core::rank::{PageRank, Termination};
use proptest::prelude::*;

/// Edge lists over a small alphabet so duplicates, cycles and sinks all occur.
fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 1..60)
}

fn build(edges: &[(u8, u8)]) -> LinkGraph {
    let lines: Vec<String> = edges.iter().map(|(s, t)| format!("p{s}\tp{t}")).collect();
    LinkGraph::from_lines(&lines).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn mass_is_conserved(
        edges in arb_edges(),
        damping in 0.01f64..0.99,
        rounds in 1usize..25,
    ) {
        let graph = build(&edges);
        let result = PageRank::new()
            .with_damping(damping)
            .with_termination(Termination::Exactly(rounds))
            .run(&graph)
            .unwrap();

        prop_assert_eq!(result.scores.len(), graph.num_pages());
        prop_assert!((result.total() - 1.0).abs() < 1e-9, "total {}", result.total());
        prop_assert!(result.scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn convergence_is_reproducible(edges in arb_edges(), damping in 0.05f64..0.95) {
        let graph = build(&edges);
        let engine = PageRank::new()
            .with_damping(damping)
            .with_termination(Termination::Converge { tolerance: 1e-9 });

        let first = engine.run(&graph).unwrap();
        let second = engine.run(&graph).unwrap();
        prop_assert_eq!(first.scores, second.scores);
        prop_assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn inlink_counts_cover_every_edge(edges in arb_edges()) {
        let graph = build(&edges);
        let total: u64 = graph.inlink_counts().iter().sum();
        prop_assert_eq!(total as usize, edges.len());
        for page in graph.pages() {
            prop_assert!(graph.inlinks(page).len() as u64 <= graph.inlink_count(page));
        }
    }
}
