//! The partition map: the full assignment of node ranges covering the ring.

use std::collections::BTreeMap;

use crate::ring::metadata::RingMetadata;
use crate::ring::position::RingPosition;
use crate::ring::range::NodeRange;

/// Mapping from range start to the range owning that slice of the ring.
///
/// # Invariants
///
/// Ordered by start, the ranges are contiguous and non-overlapping and their
/// union is the entire ring. Every mutation made through the rebalance
/// operations preserves this; the low-level `insert`/`remove` accessors exist
/// for those operations and for reassembling published snapshots, and leave
/// invariant maintenance to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionMap {
    ranges: BTreeMap<RingPosition, NodeRange>,
}

impl PartitionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a map from a set of ranges, keyed by each range's start.
    pub fn from_ranges(ranges: impl IntoIterator<Item = NodeRange>) -> Self {
        let mut map = Self::new();
        for range in ranges {
            map.insert(range);
        }
        map
    }

    /// Inserts a range keyed by its own start, replacing any entry already
    /// keyed there.
    pub fn insert(&mut self, range: NodeRange) {
        self.ranges.insert(range.start(), range);
    }

    /// Removes the range keyed by `start`, returning it if present.
    pub fn remove(&mut self, start: RingPosition) -> Option<NodeRange> {
        self.ranges.remove(&start)
    }

    /// Returns the range keyed by `start`.
    pub fn get(&self, start: RingPosition) -> Option<&NodeRange> {
        self.ranges.get(&start)
    }

    pub fn contains(&self, start: RingPosition) -> bool {
        self.ranges.contains_key(&start)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Ranges in ascending start order.
    pub fn ranges(&self) -> impl Iterator<Item = &NodeRange> {
        self.ranges.values()
    }

    /// Start positions in ascending order.
    pub fn starts(&self) -> impl Iterator<Item = RingPosition> + '_ {
        self.ranges.keys().copied()
    }

    /// Ordered snapshot of the ranges, for publication by the configuration
    /// collaborator.
    pub fn to_entries(&self) -> Vec<NodeRange> {
        self.ranges.values().cloned().collect()
    }

    /// The range owning `position`: the entry with the greatest start at or
    /// below it, wrapping to the last entry when the position precedes every
    /// start.
    ///
    /// Relies on the coverage invariant; on a map that does not cover the
    /// ring the result is meaningless.
    pub fn owner_of(&self, position: RingPosition) -> Option<&NodeRange> {
        self.ranges
            .range(..=position)
            .next_back()
            .map(|(_, range)| range)
            .or_else(|| self.ranges.values().next_back())
    }

    /// The range with the largest span; ties broken by lowest start.
    ///
    /// Iteration is in ascending start order and only a strictly larger span
    /// displaces the current candidate, so the lowest start wins ties.
    pub fn largest_range(&self, ring: &RingMetadata) -> Option<&NodeRange> {
        let mut largest: Option<(&NodeRange, i64)> = None;
        for range in self.ranges.values() {
            let span = range.span(ring);
            match largest {
                Some((_, best)) if span <= best => {}
                _ => largest = Some((range, span)),
            }
        }
        largest.map(|(range, _)| range)
    }

    /// Verifies the coverage invariant: each range's end is the next range's
    /// start (cyclically) and the spans sum to the whole ring.
    pub fn covers_ring(&self, ring: &RingMetadata) -> bool {
        if self.ranges.is_empty() {
            return false;
        }
        let ranges: Vec<&NodeRange> = self.ranges.values().collect();
        let mut total = 0i64;
        for (i, range) in ranges.iter().enumerate() {
            let next = ranges[(i + 1) % ranges.len()];
            if range.end() != next.start() {
                return false;
            }
            total += range.span(ring);
        }
        total == ring.range()
    }
}
