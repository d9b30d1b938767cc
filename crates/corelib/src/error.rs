//! Error types for the partitioning core.
//!
//! Three kinds cover every failure the core can signal. `InvalidArgument` is
//! a caller bug and must never be retried as-is. `InsufficientCapacity` is an
//! operational condition: the control plane may retry once more nodes are
//! enabled. `NoRoomToGrow` means every range already has span 1; growing
//! again requires a larger ring, not a retry.

use thiserror::Error;

/// Result type alias for the partitioning core.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the partitioning core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition on a public operation's inputs was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough enabled nodes to satisfy a placement request.
    #[error("insufficient capacity: requested {requested} nodes, {available} enabled")]
    InsufficientCapacity { requested: usize, available: usize },

    /// Every range in the map already has span 1; the ring is at its finest
    /// possible granularity.
    #[error("no room to grow: every range already has span 1")]
    NoRoomToGrow,
}

impl Error {
    /// Shorthand for an `InvalidArgument` with the violated constraint.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
