//! # cebg
//!
//! A cause-effect bipartite counting graph for lightweight causal inference.
//!
//! Left nodes are observed events (evidence); right nodes are a fixed set of
//! conclusions. Every training sample records a co-occurrence between a set
//! of left nodes and one right node, and inference ranks conclusions by the
//! summed per-event co-occurrence proportions.
//!
//! Usage:
//! 1. construct a [`CauseEffectGraph`],
//! 2. [`load`](CauseEffectGraph::load) prior state (or start untrained),
//! 3. [`train`](CauseEffectGraph::train) as evidence arrives, and query with
//!    [`probability`](CauseEffectGraph::probability),
//! 4. [`package`](CauseEffectGraph::package) a snapshot for the caller to
//!    persist and feed back into the next session's `load`.
//!
//! The crate does no I/O of its own; the serialized snapshot is a JSON blob
//! the caller stores wherever it likes.

pub mod errors;
pub mod graph;
pub mod snapshot;

// Re-export the most commonly used types at the crate root.
pub use errors::{GraphError, GraphResult};
pub use graph::{CauseEffectGraph, Conclusion};
pub use snapshot::GraphSnapshot;
