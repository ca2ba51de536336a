//! Property tests for the counting invariants and the snapshot round-trip.

use proptest::prelude::*;

use cebg::CauseEffectGraph;

const RIGHT_LABELS: [&str; 3] = ["rain", "sun", "snow"];

/// A training sample: a handful of left labels and a conclusion index.
/// Conclusion indexes past the configured set exercise the no-op path.
fn sample_strategy() -> impl Strategy<Value = (Vec<String>, usize)> {
    (
        prop::collection::vec("[a-e]{1,3}", 1..5),
        0..RIGHT_LABELS.len() + 2,
    )
}

fn trained_graph(samples: &[(Vec<String>, usize)]) -> CauseEffectGraph {
    let mut graph = CauseEffectGraph::new();
    graph
        .load(None, &RIGHT_LABELS)
        .expect("empty load never fails");
    for (left_labels, right_idx) in samples {
        let right = RIGHT_LABELS.get(*right_idx).copied().unwrap_or("unknown");
        graph.train(left_labels, right);
    }
    graph
}

proptest! {
    /// count == sum of edge weights for every left node, after any sequence
    /// of training samples.
    #[test]
    fn count_matches_edge_sum(samples in prop::collection::vec(sample_strategy(), 0..40)) {
        let graph = trained_graph(&samples);
        for (labels, _) in &samples {
            for label in labels {
                if let Some(node) = graph.left_node(label) {
                    prop_assert_eq!(node.count(), node.edges().values().sum::<u64>());
                }
            }
        }
    }

    /// package → load with the same right set reproduces an equal graph.
    #[test]
    fn snapshot_round_trip(samples in prop::collection::vec(sample_strategy(), 0..40)) {
        let graph = trained_graph(&samples);
        let blob = graph.package().expect("package never fails on a valid graph");

        let mut restored = CauseEffectGraph::new();
        restored.load(Some(&blob), &RIGHT_LABELS).expect("own snapshot must load");
        prop_assert_eq!(restored, graph);
    }

    /// Training only grows the targeted edges and never touches other nodes.
    #[test]
    fn train_is_monotone(
        samples in prop::collection::vec(sample_strategy(), 0..20),
        extra in sample_strategy(),
    ) {
        let mut graph = trained_graph(&samples);
        let before = graph.clone();

        let (left_labels, right_idx) = &extra;
        let right = RIGHT_LABELS.get(*right_idx).copied().unwrap_or("unknown");
        graph.train(left_labels, right);

        let trained_known = RIGHT_LABELS.contains(&right);
        for (labels, _) in &samples {
            for label in labels {
                // Samples aimed at an unknown conclusion never created a node.
                let Some(old) = before.left_node(label) else { continue };
                let new = graph.left_node(label).expect("nodes are never removed");
                prop_assert!(new.count() >= old.count());
                for (edge, weight) in old.edges() {
                    prop_assert!(new.weight(edge) >= *weight);
                }
                // Nodes outside this sample are untouched.
                if !trained_known || !left_labels.contains(label) {
                    prop_assert_eq!(new, old);
                }
            }
        }
    }

    /// Training toward an unknown conclusion leaves the graph unchanged.
    #[test]
    fn unknown_conclusion_is_a_noop(
        samples in prop::collection::vec(sample_strategy(), 0..20),
        left_labels in prop::collection::vec("[a-e]{1,3}", 1..5),
    ) {
        let mut graph = trained_graph(&samples);
        let before = graph.clone();
        graph.train(&left_labels, "not-a-conclusion");
        prop_assert_eq!(graph, before);
    }

    /// Inference never errors and only ever names a configured conclusion
    /// (or the empty sentinel).
    #[test]
    fn inference_stays_in_the_conclusion_set(
        samples in prop::collection::vec(sample_strategy(), 0..40),
        query in prop::collection::vec("[a-h]{1,3}", 0..6),
    ) {
        let graph = trained_graph(&samples);
        let winner = graph.probability(&query);
        prop_assert!(
            winner.is_empty() || RIGHT_LABELS.contains(&winner.as_str()),
            "winner {:?} not in the configured set", winner
        );

        // Tie winners may differ between the two query paths (unspecified
        // iteration order), so only the membership claim holds for both.
        let conclusion = graph.probability_with_detail(&query);
        prop_assert!(
            conclusion.label.is_empty() || RIGHT_LABELS.contains(&conclusion.label.as_str())
        );
        prop_assert!(conclusion.score >= 0.0);
    }
}
