//! The bipartite counting graph: load, train, infer, package.

pub mod left_node;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::{GraphError, GraphResult};
use crate::snapshot::{EdgeRecord, GraphSnapshot, LeftNodeRecord};

pub use left_node::LeftNode;

/// A winning conclusion together with its averaged score.
#[derive(Debug, Clone, PartialEq)]
pub struct Conclusion {
    /// Winning right-node label; empty when no evidence resolved.
    pub label: String,
    /// Winning summed score divided by the number of resolved left nodes;
    /// 0.0 when no evidence resolved.
    pub score: f64,
}

impl Conclusion {
    /// The "no conclusion" sentinel.
    pub fn none() -> Self {
        Self {
            label: String::new(),
            score: 0.0,
        }
    }
}

/// Cause-effect bipartite counting graph.
///
/// Owns every left node (observed events, created lazily by training) and
/// the fixed set of right nodes (conclusions, supplied at load time).
/// Mutation is `&mut self`, queries are `&self`; there is no internal
/// locking and no I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CauseEffectGraph {
    left_nodes: HashMap<String, LeftNode>,
    right_nodes: HashSet<String>,
}

impl CauseEffectGraph {
    /// Create an empty graph with no right nodes. Useless until `load`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the graph and rebuild it from a persisted snapshot.
    ///
    /// One right node is created per entry in `right_labels` (duplicates
    /// collapse). `None` for `snapshot` yields a valid untrained graph.
    /// A present snapshot must parse as the [`GraphSnapshot`](crate::snapshot)
    /// schema; every edge must reference a label in `right_labels` and every
    /// record's `count` must equal the sum of its edge counts. Violations
    /// are caller misuse and fail with a typed error, leaving the graph
    /// untrained.
    pub fn load<S: AsRef<str>>(
        &mut self,
        snapshot: Option<&str>,
        right_labels: &[S],
    ) -> GraphResult<()> {
        self.left_nodes.clear();
        self.right_nodes = right_labels
            .iter()
            .map(|label| label.as_ref().to_string())
            .collect();

        let Some(raw) = snapshot else {
            debug!(
                right_nodes = self.right_nodes.len(),
                "loaded untrained graph"
            );
            return Ok(());
        };

        let parsed: GraphSnapshot = serde_json::from_str(raw)?;

        let mut left_nodes = HashMap::with_capacity(parsed.left_nodes.len());
        for record in &parsed.left_nodes {
            let mut node = LeftNode::new(record.name.clone());
            for edge in &record.right_nodes {
                if !self.right_nodes.contains(&edge.name) {
                    return Err(GraphError::UnknownRightNode {
                        left: record.name.clone(),
                        right: edge.name.clone(),
                    });
                }
                node.record(&edge.name, edge.count);
            }
            if node.count() != record.count {
                return Err(GraphError::CountMismatch {
                    left: record.name.clone(),
                    declared: record.count,
                    actual: node.count(),
                });
            }
            left_nodes.insert(record.name.clone(), node);
        }
        self.left_nodes = left_nodes;

        debug!(
            left_nodes = self.left_nodes.len(),
            right_nodes = self.right_nodes.len(),
            "graph loaded from snapshot"
        );
        Ok(())
    }

    /// Record one training sample: the given left nodes were observed
    /// together with the `right_label` outcome.
    ///
    /// Left nodes are created on first sight. An unknown `right_label` is a
    /// silent no-op: the conclusion set is fixed configuration and stray
    /// outcomes are expected at runtime, unlike at load time.
    pub fn train<S: AsRef<str>>(&mut self, left_labels: &[S], right_label: &str) {
        if !self.right_nodes.contains(right_label) {
            debug!(right = right_label, "unknown conclusion, sample ignored");
            return;
        }
        for label in left_labels {
            let label = label.as_ref();
            self.left_nodes
                .entry(label.to_string())
                .or_insert_with(|| LeftNode::new(label))
                .record(right_label, 1);
        }
    }

    /// Infer the most likely conclusion for the given evidence.
    ///
    /// Labels that resolve to no left node are skipped. Returns the label
    /// with the strictly greatest summed score; on a tie the first candidate
    /// encountered wins, and map iteration order is unspecified, so the tie
    /// winner is not a contract. Returns the empty string when no evidence
    /// resolves.
    pub fn probability<S: AsRef<str>>(&self, left_labels: &[S]) -> String {
        let (summed, _resolved) = self.aggregate(left_labels);
        Self::winner(&summed).to_string()
    }

    /// Like [`probability`](Self::probability), but also reports the winning
    /// score averaged over the RESOLVED left nodes (not over the input
    /// labels). With no resolved evidence this returns
    /// [`Conclusion::none`] rather than dividing by zero.
    pub fn probability_with_detail<S: AsRef<str>>(&self, left_labels: &[S]) -> Conclusion {
        let (summed, resolved) = self.aggregate(left_labels);
        if resolved == 0 {
            debug!("no evidence resolved, returning empty conclusion");
            return Conclusion::none();
        }
        let label = Self::winner(&summed);
        let score = summed.get(label).copied().unwrap_or(0.0) / resolved as f64;
        Conclusion {
            label: label.to_string(),
            score,
        }
    }

    /// Serialize every left node into the snapshot schema, pretty-printed.
    ///
    /// Right nodes are not serialized; the caller re-supplies them to the
    /// next session's `load`. Does not mutate the graph.
    pub fn package(&self) -> GraphResult<String> {
        let snapshot = GraphSnapshot {
            left_nodes: self
                .left_nodes
                .values()
                .map(|node| LeftNodeRecord {
                    name: node.label().to_string(),
                    count: node.count(),
                    right_nodes: node
                        .edges()
                        .iter()
                        .map(|(right, weight)| EdgeRecord {
                            name: right.clone(),
                            count: *weight,
                        })
                        .collect(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Whether any training has been recorded.
    pub fn is_trained(&self) -> bool {
        !self.left_nodes.is_empty()
    }

    /// Look up a left node by label.
    pub fn left_node(&self, label: &str) -> Option<&LeftNode> {
        self.left_nodes.get(label)
    }

    pub fn left_node_count(&self) -> usize {
        self.left_nodes.len()
    }

    pub fn right_node_count(&self) -> usize {
        self.right_nodes.len()
    }

    /// Whether `label` is in the configured conclusion set.
    pub fn contains_right(&self, label: &str) -> bool {
        self.right_nodes.contains(label)
    }

    /// Sum the per-node distributions elementwise across the resolved left
    /// nodes. Returns the summed scores and how many labels resolved.
    fn aggregate<S: AsRef<str>>(&self, left_labels: &[S]) -> (HashMap<&str, f64>, usize) {
        let mut summed: HashMap<&str, f64> = HashMap::new();
        let mut resolved = 0;
        for label in left_labels {
            let Some(node) = self.left_nodes.get(label.as_ref()) else {
                continue;
            };
            resolved += 1;
            for (right, share) in node.distribution() {
                *summed.entry(right).or_insert(0.0) += share;
            }
        }
        (summed, resolved)
    }

    /// Label with the strictly greatest summed score; empty if nothing beats
    /// zero. First-encountered wins on exact ties.
    fn winner<'a>(summed: &HashMap<&'a str, f64>) -> &'a str {
        let mut best = 0.0;
        let mut best_label = "";
        for (&label, &score) in summed {
            if score > best {
                best = score;
                best_label = label;
            }
        }
        best_label
    }
}
