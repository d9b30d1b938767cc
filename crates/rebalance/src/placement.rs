//! Node selection for new range placements.
//!
//! When the control plane creates or splits a range it must bind the new
//! range to a physical node. The selector draws a random subset of the
//! currently enabled nodes; selection is not stable across calls. The only
//! contract is distinctness and count.

use rand::seq::SliceRandom;
use tracing::debug;

use corelib::error::{Error, Result};
use corelib::node::{Node, NodeId};

/// Source of currently enabled node identifiers.
///
/// The authoritative registry lives outside this crate (a relational store
/// behind the control plane); this trait is the seam it is consumed through.
pub trait NodeRegistry {
    /// Identifiers of every node currently eligible for placements.
    fn enabled_nodes(&self) -> Vec<NodeId>;
}

/// In-memory registry over a fixed set of nodes.
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    nodes: Vec<Node>,
}

impl StaticRegistry {
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }
}

impl NodeRegistry for StaticRegistry {
    fn enabled_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| node.enabled)
            .map(|node| node.id)
            .collect()
    }
}

/// Picks enabled nodes for new placements, uniformly at random.
#[derive(Clone, Debug)]
pub struct NodeAvailability<R: NodeRegistry> {
    registry: R,
}

impl<R: NodeRegistry> NodeAvailability<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Returns exactly `count` distinct enabled node identifiers.
    ///
    /// Fails with `InvalidArgument` when `count < 1`, and with
    /// `InsufficientCapacity` when fewer than `count` nodes are enabled;
    /// the latter is an operational condition the caller may retry after
    /// capacity is added.
    pub fn pick_available(&self, count: usize) -> Result<Vec<NodeId>> {
        if count < 1 {
            return Err(Error::invalid("count must be greater than zero"));
        }

        let enabled = self.registry.enabled_nodes();
        if enabled.len() < count {
            return Err(Error::InsufficientCapacity {
                requested: count,
                available: enabled.len(),
            });
        }

        let picked: Vec<NodeId> = enabled
            .choose_multiple(&mut rand::thread_rng(), count)
            .copied()
            .collect();
        debug!(requested = count, enabled = enabled.len(), "picked placement nodes");
        Ok(picked)
    }
}
