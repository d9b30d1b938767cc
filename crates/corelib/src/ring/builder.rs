//! Initial partition construction: one contiguous range per node, ranges
//! collectively covering the whole ring.

use crate::error::{Error, Result};
use crate::ring::map::PartitionMap;
use crate::ring::metadata::RingMetadata;
use crate::ring::position::RingPosition;
use crate::ring::range::NodeRange;
use crate::ring::space;

/// Builds the initial partition map for a fresh deployment.
///
/// Used exactly once per deployment; thereafter the map is only transformed
/// by rebalance operations. Identical inputs produce identical boundaries
/// (only the generated range identifiers differ).
#[derive(Clone, Copy, Debug, Default)]
pub struct PartitionBuilder;

impl PartitionBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Cuts a ring of `range` positions into `node_count` contiguous ranges
    /// of `floor(range / node_count)` positions each; the last range absorbs
    /// the remainder and closes the ring back to start 0.
    ///
    /// Fails with `InvalidArgument` naming the violated constraint.
    pub fn build(
        &self,
        node_count: i64,
        range: i64,
        replication_factor: i64,
    ) -> Result<(PartitionMap, RingMetadata)> {
        if range < 1 {
            return Err(Error::invalid("range must be greater than zero"));
        }
        if replication_factor < 1 {
            return Err(Error::invalid(
                "replication factor must be greater than zero",
            ));
        }
        if node_count < 1 {
            return Err(Error::invalid("node count must be greater than zero"));
        }
        if replication_factor > range {
            return Err(Error::invalid(
                "replication factor cannot be greater than the range of the ring",
            ));
        }
        if node_count > range {
            return Err(Error::invalid(
                "node count cannot be greater than the range of the ring",
            ));
        }
        if replication_factor > node_count {
            return Err(Error::invalid(
                "replication factor cannot be greater than the node count",
            ));
        }

        let metadata = RingMetadata::new(range, replication_factor)?;
        Ok((layout(node_count, range), metadata))
    }

    /// Builds over the full 32-bit key space.
    pub fn build_full(
        &self,
        node_count: i64,
        replication_factor: i64,
    ) -> Result<(PartitionMap, RingMetadata)> {
        self.build(node_count, space::TOTAL_SPAN, replication_factor)
    }
}

/// Lays out `node_count` contiguous ranges over a validated `range`.
///
/// Starts at position 0 and steps by `floor(range / node_count)`, folding
/// starts that land past the maximum back through the minimum; the final
/// range ends where the first begins.
pub(crate) fn layout(node_count: i64, range: i64) -> PartitionMap {
    let range_per_node = range / node_count;
    let starts: Vec<RingPosition> = (0..node_count)
        .map(|i| RingPosition(space::fold(i * range_per_node)))
        .collect();

    let mut map = PartitionMap::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts[(i + 1) % starts.len()];
        map.insert(NodeRange::fresh(start, end));
    }
    map
}
