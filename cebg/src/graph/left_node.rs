//! LeftNode: per-event edge counters toward the conclusion set.

use std::collections::HashMap;

/// An observed event with weighted edges to the conclusions it has
/// co-occurred with.
///
/// Invariant: `count` always equals the sum of the edge weights. `record`
/// is the only mutation path and maintains it; weights only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeftNode {
    label: String,
    /// Total training increments recorded for this node.
    count: u64,
    /// Right-node label -> co-occurrence count.
    edges: HashMap<String, u64>,
}

impl LeftNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
            edges: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn edges(&self) -> &HashMap<String, u64> {
        &self.edges
    }

    /// Weight of the edge toward `right`, 0 if none exists yet.
    pub fn weight(&self, right: &str) -> u64 {
        self.edges.get(right).copied().unwrap_or(0)
    }

    /// Record `n` co-occurrences with `right`, creating the edge on first
    /// contact.
    pub fn record(&mut self, right: &str, n: u64) {
        self.count += n;
        *self.edges.entry(right.to_string()).or_insert(0) += n;
    }

    /// The node's probability distribution over its conclusions:
    /// `weight / count` per edge, each in `[0, 1]`, summing to 1 for a
    /// trained node. Empty for an untrained node.
    pub fn distribution(&self) -> HashMap<&str, f64> {
        let total = self.count as f64;
        self.edges
            .iter()
            .map(|(right, weight)| (right.as_str(), *weight as f64 / total))
            .collect()
    }
}
