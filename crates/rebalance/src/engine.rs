//! Rebalance operations over a partition map.
//!
//! All operations are pure transformations: they take the map and metadata by
//! reference and return new values, keeping the caller in control of
//! publishing. Single-writer discipline around the authoritative map is the
//! caller's responsibility (typically the configuration store's
//! compare-and-swap).

use tracing::debug;

use corelib::error::{Error, Result};
use corelib::ring::{space, NodeRange, PartitionMap, RingMetadata, RingPosition};

/// Pure rebalancing operations: split, replace, grow, initialize.
#[derive(Clone, Copy, Debug, Default)]
pub struct RebalanceEngine;

impl RebalanceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Splits a range in two at its midpoint.
    ///
    /// The first half keeps the input's identity, narrowed to end at the
    /// midpoint; its physical owner and data stay put. The second half gets
    /// a fresh identifier and is the only part whose data must move.
    ///
    /// Returns `None` when the range has no interior position (span <= 1).
    pub fn split_range(
        &self,
        ring: &RingMetadata,
        range: &NodeRange,
    ) -> Option<(NodeRange, NodeRange)> {
        let midpoint = ring.midpoint(range.start(), range.end())?;
        let first = NodeRange::new(range.id(), range.start(), midpoint);
        let second = NodeRange::fresh(midpoint, range.end());
        Some((first, second))
    }

    /// Returns a map with `old` removed and each replacement inserted under
    /// its own start.
    ///
    /// Fails with `InvalidArgument` when `old` is not present in the map;
    /// that is a caller error, not a normal outcome.
    pub fn replace_range(
        &self,
        map: &PartitionMap,
        old: &NodeRange,
        replacements: &[NodeRange],
    ) -> Result<PartitionMap> {
        if !map.contains(old.start()) {
            return Err(Error::invalid(format!(
                "range starting at {} is not present in the partition map",
                old.start()
            )));
        }
        let mut next = map.clone();
        next.remove(old.start());
        for replacement in replacements {
            next.insert(replacement.clone());
        }
        Ok(next)
    }

    /// Grows the map by exactly one node by splitting the largest range.
    ///
    /// The largest range (ties broken by lowest start) is split at its
    /// midpoint and replaced by its two halves; every other range keeps its
    /// boundaries and identity. Fails with `NoRoomToGrow` when the largest
    /// range has span 1: every range is then at the finest possible
    /// granularity and the map cannot grow without a larger ring.
    pub fn increment_node_count(
        &self,
        ring: &RingMetadata,
        map: &PartitionMap,
    ) -> Result<PartitionMap> {
        let largest = map
            .largest_range(ring)
            .ok_or_else(|| Error::invalid("partition map is empty"))?
            .clone();

        let (first, second) = self.split_range(ring, &largest).ok_or(Error::NoRoomToGrow)?;
        debug!(
            range = %largest,
            span = largest.span(ring),
            midpoint = %second.start(),
            "splitting largest range to grow the map"
        );
        self.replace_range(map, &largest, &[first, second])
    }

    /// Builds a fresh partition map over an existing ring's metadata.
    ///
    /// Equivalent to the initial builder restricted to a node count: the
    /// ring's range and replication factor are taken as already validated.
    pub fn initialize(&self, ring: &RingMetadata, node_count: i64) -> Result<PartitionMap> {
        if node_count < 1 {
            return Err(Error::invalid("node count must be greater than zero"));
        }
        if node_count > ring.range() {
            return Err(Error::invalid(
                "node count cannot be greater than the range of the ring",
            ));
        }

        let range_per_node = ring.range() / node_count;
        let starts: Vec<RingPosition> = (0..node_count)
            .map(|i| RingPosition(space::fold(i * range_per_node)))
            .collect();

        let mut map = PartitionMap::new();
        for (i, &start) in starts.iter().enumerate() {
            let end = starts[(i + 1) % starts.len()];
            map.insert(NodeRange::fresh(start, end));
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::ring::RangeId;

    fn ring(range: i64) -> RingMetadata {
        RingMetadata::new(range, 2).unwrap()
    }

    fn range_of(start: i32, end: i32) -> NodeRange {
        NodeRange::new(
            RangeId::generate(),
            RingPosition(start),
            RingPosition(end),
        )
    }

    #[test]
    fn test_split_reconstructs_the_original() {
        let engine = RebalanceEngine::new();
        let metadata = ring(11);
        let original = range_of(5, 1);

        let (first, second) = engine.split_range(&metadata, &original).unwrap();
        assert_eq!(first.id(), original.id());
        assert_ne!(second.id(), original.id());
        assert_eq!(first.start(), original.start());
        assert_eq!(first.end(), second.start());
        assert_eq!(second.end(), original.end());
        assert_eq!(
            first.span(&metadata) + second.span(&metadata),
            original.span(&metadata)
        );
    }

    #[test]
    fn test_split_of_unit_span_is_none() {
        let engine = RebalanceEngine::new();
        let metadata = ring(11);
        assert!(engine.split_range(&metadata, &range_of(4, 5)).is_none());
    }

    #[test]
    fn test_replace_swaps_entries_by_start() {
        let engine = RebalanceEngine::new();
        let old = range_of(0, 5);
        let keep = range_of(5, 0);
        let map = PartitionMap::from_ranges([old.clone(), keep.clone()]);

        let halves = [range_of(0, 2), range_of(2, 5)];
        let next = engine.replace_range(&map, &old, &halves).unwrap();

        assert_eq!(next.len(), 3);
        assert!(next.contains(RingPosition(0)));
        assert!(next.contains(RingPosition(2)));
        assert_eq!(next.get(RingPosition(5)), Some(&keep));
        // The input map is untouched.
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_replace_of_absent_range_is_an_error() {
        let engine = RebalanceEngine::new();
        let map = PartitionMap::from_ranges([range_of(0, 0)]);
        let absent = range_of(7, 9);
        assert!(matches!(
            engine.replace_range(&map, &absent, &[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_increment_splits_the_wrapping_majority_range() {
        let engine = RebalanceEngine::new();
        let metadata = ring(11);
        let map = PartitionMap::from_ranges([range_of(0, 5), range_of(5, 1)]);

        let grown = engine.increment_node_count(&metadata, &map).unwrap();
        let starts: Vec<i32> = grown.starts().map(|p| p.0).collect();
        assert_eq!(starts, vec![0, 5, 8]);
        assert_eq!(grown.len(), 3);
        assert!(grown.covers_ring(&metadata));
    }

    #[test]
    fn test_increment_touches_only_the_split_range() {
        let engine = RebalanceEngine::new();
        let metadata = ring(16);
        let untouched = [range_of(0, 4), range_of(4, 8)];
        let map = PartitionMap::from_ranges(
            untouched.iter().cloned().chain([range_of(8, 0)]),
        );

        let grown = engine.increment_node_count(&metadata, &map).unwrap();
        assert_eq!(grown.len(), 4);
        for range in &untouched {
            assert_eq!(grown.get(range.start()), Some(range));
        }
        // The wrapping range [8, 0) had span 8 and split at 12.
        assert!(grown.contains(RingPosition(12)));
        assert!(grown.covers_ring(&metadata));
    }

    #[test]
    fn test_increment_at_finest_granularity_is_no_room_to_grow() {
        let engine = RebalanceEngine::new();
        let metadata = ring(2);
        let map = PartitionMap::from_ranges([range_of(0, 1), range_of(1, 0)]);
        assert_eq!(
            engine.increment_node_count(&metadata, &map),
            Err(Error::NoRoomToGrow)
        );
    }

    #[test]
    fn test_increment_of_empty_map_is_invalid() {
        let engine = RebalanceEngine::new();
        assert!(matches!(
            engine.increment_node_count(&ring(8), &PartitionMap::new()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_initialize_matches_the_builder_layout() {
        let engine = RebalanceEngine::new();
        let metadata = ring(12);
        let map = engine.initialize(&metadata, 3).unwrap();
        let starts: Vec<i32> = map.starts().map(|p| p.0).collect();
        assert_eq!(starts, vec![0, 4, 8]);
        assert!(map.covers_ring(&metadata));
    }

    #[test]
    fn test_initialize_boundary_validation() {
        let engine = RebalanceEngine::new();
        let metadata = ring(12);

        let too_few = engine.initialize(&metadata, 0).unwrap_err();
        assert_eq!(
            too_few.to_string(),
            "invalid argument: node count must be greater than zero"
        );

        let too_many = engine.initialize(&metadata, 13).unwrap_err();
        assert_eq!(
            too_many.to_string(),
            "invalid argument: node count cannot be greater than the range of the ring"
        );
    }
}
