//! Node abstractions for the partitioned cluster.
//!
//! Nodes represent physical storage machines registered with the control
//! plane. They are identified by a compact `NodeId` that is cheap to compare
//! and hash.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compact identifier for a node in the cluster.
///
/// Newtype over `u128` so comparisons and hashing are very fast while giving
/// plenty of space for uniqueness.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub u128);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Physical storage node registered with the control plane.
///
/// Keep this struct small and cheap to clone; heavy mutable state
/// (connections, tenant tables, queues) lives in the surrounding services.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Human-readable name or hostname.
    pub name: String,
    /// Whether the node may receive new range placements.
    pub enabled: bool,
}

impl Node {
    /// Construct a new enabled node with basic metadata.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enabled: true,
        }
    }

    /// Construct a node in an explicit enablement state.
    pub fn with_enabled(id: NodeId, name: impl Into<String>, enabled: bool) -> Self {
        Self {
            id,
            name: name.into(),
            enabled,
        }
    }
}
