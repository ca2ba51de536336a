//! Error types for snapshot loading and packaging.
//!
//! Load-time failures are caller misuse (corrupt or inconsistent inputs) and
//! surface as typed errors. Runtime query misses (unknown labels) are normal
//! cold-start conditions and never produce an error.

/// Result alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;

/// Graph snapshot errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("malformed graph snapshot: {source}")]
    MalformedSnapshot {
        #[from]
        source: serde_json::Error,
    },

    #[error("snapshot edge {left:?} -> {right:?} references a right node not in the configured set")]
    UnknownRightNode { left: String, right: String },

    #[error("left node {left:?} declares count {declared} but its edges sum to {actual}")]
    CountMismatch {
        left: String,
        declared: u64,
        actual: u64,
    },
}
