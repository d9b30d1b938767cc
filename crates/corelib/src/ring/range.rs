//! Node ranges: contiguous arcs of the ring owned by one partition.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ring::metadata::RingMetadata;
use crate::ring::position::RingPosition;

/// Opaque identifier for a node range.
///
/// A fresh identifier is generated for the new half of every split; the
/// parent half keeps its original identifier so its physical owner (and data)
/// stay put.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct RangeId(Uuid);

impl RangeId {
    /// Generates a fresh, globally unique identifier.
    pub fn generate() -> Self {
        RangeId(Uuid::new_v4())
    }
}

impl fmt::Display for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contiguous, possibly wrapping, half-open arc of the ring.
///
/// Covers `[start, end)`; when `end` is numerically at or below `start` the
/// range wraps, covering `[start, MAX] ∪ [MIN, end)`. `end == start` means
/// the range covers the entire ring.
///
/// # Invariants
///
/// - The span (number of positions covered, wraparound-aware) is >= 1.
/// - Identity is carried by `id`, not by the boundaries: a split narrows the
///   parent in place while its `id` survives.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NodeRange {
    id: RangeId,
    start: RingPosition,
    end: RingPosition,
}

impl NodeRange {
    /// Creates a range with an existing identity.
    pub fn new(id: RangeId, start: RingPosition, end: RingPosition) -> Self {
        Self { id, start, end }
    }

    /// Creates a range with a freshly generated identifier.
    pub fn fresh(start: RingPosition, end: RingPosition) -> Self {
        Self::new(RangeId::generate(), start, end)
    }

    pub fn id(&self) -> RangeId {
        self.id
    }

    /// Inclusive start of the range; also its key in the partition map.
    pub fn start(&self) -> RingPosition {
        self.start
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> RingPosition {
        self.end
    }

    /// True when the range crosses the maximum position back to the minimum.
    pub fn wraps(&self) -> bool {
        self.end <= self.start
    }

    /// Number of positions this range covers on the given ring.
    pub fn span(&self, ring: &RingMetadata) -> i64 {
        ring.span_of(self.start, self.end)
    }
}

impl fmt::Display for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) ({})", self.start, self.end, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ranges_get_distinct_ids() {
        let a = NodeRange::fresh(RingPosition(0), RingPosition(5));
        let b = NodeRange::fresh(RingPosition(0), RingPosition(5));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_wrapping_is_detected() {
        let plain = NodeRange::fresh(RingPosition(0), RingPosition(5));
        let wrapped = NodeRange::fresh(RingPosition(5), RingPosition(1));
        let full = NodeRange::fresh(RingPosition(3), RingPosition(3));
        assert!(!plain.wraps());
        assert!(wrapped.wraps());
        assert!(full.wraps());
    }

    #[test]
    fn test_span_accounts_for_wraparound() {
        let ring = RingMetadata::new(11, 2).unwrap();
        let plain = NodeRange::fresh(RingPosition(0), RingPosition(5));
        let wrapped = NodeRange::fresh(RingPosition(5), RingPosition(1));
        let full = NodeRange::fresh(RingPosition(3), RingPosition(3));
        assert_eq!(plain.span(&ring), 5);
        assert_eq!(wrapped.span(&ring), 7);
        assert_eq!(full.span(&ring), 11);
    }
}
