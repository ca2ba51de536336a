//! Wire types for the persisted graph snapshot.
//!
//! The snapshot is a JSON document listing every left node with its total
//! count and its weighted edges. Right nodes are deliberately absent: the
//! right-node set is caller-owned configuration, re-supplied to
//! [`load`](crate::CauseEffectGraph::load) each session.
//!
//! Schema:
//!
//! ```json
//! {
//!   "LeftNode": [
//!     { "name": "cloudy", "count": 3, "rightNodes": [
//!         { "name": "rain", "count": 3 } ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// All left nodes. Absent in the document means an untrained graph.
    #[serde(rename = "LeftNode", default)]
    pub left_nodes: Vec<LeftNodeRecord>,
}

/// One persisted left node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeftNodeRecord {
    pub name: String,
    /// Total training increments; must equal the sum of the edge counts.
    pub count: u64,
    #[serde(rename = "rightNodes")]
    pub right_nodes: Vec<EdgeRecord>,
}

/// One persisted edge: a right-node label and its co-occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
    pub name: String,
    pub count: u64,
}
