//! Ring metadata: range, replication factor, and derived replication
//! distance.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ring::position::RingPosition;
use crate::ring::space;

/// Immutable description of one ring deployment.
///
/// `range` is the number of positions on the ring: `2^32` in production,
/// smaller for reduced synthetic rings in tests. `replication_distance` is
/// the derived spacing between replicas (`range / replication_factor`,
/// integer division).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RingMetadata {
    range: i64,
    replication_factor: i64,
    replication_distance: i64,
}

impl RingMetadata {
    /// Creates metadata for a ring of `range` positions.
    ///
    /// Fails with `InvalidArgument` when `range < 1`, when
    /// `replication_factor < 1`, or when `replication_factor > range`.
    pub fn new(range: i64, replication_factor: i64) -> Result<Self> {
        if range < 1 {
            return Err(Error::invalid("range must be greater than zero"));
        }
        if replication_factor < 1 {
            return Err(Error::invalid(
                "replication factor must be greater than zero",
            ));
        }
        if replication_factor > range {
            return Err(Error::invalid(
                "replication factor cannot be greater than the range of the ring",
            ));
        }
        Ok(Self {
            range,
            replication_factor,
            replication_distance: range / replication_factor,
        })
    }

    /// Creates metadata over the full 32-bit key space.
    pub fn full(replication_factor: i64) -> Result<Self> {
        Self::new(space::TOTAL_SPAN, replication_factor)
    }

    pub fn range(&self) -> i64 {
        self.range
    }

    pub fn replication_factor(&self) -> i64 {
        self.replication_factor
    }

    pub fn replication_distance(&self) -> i64 {
        self.replication_distance
    }

    /// Number of positions in `[start, end)`, wraparound-aware.
    ///
    /// Normalized into `[1, range]`: `end == start` means the whole ring.
    pub fn span_of(&self, start: RingPosition, end: RingPosition) -> i64 {
        let mut span = end.0 as i64 - start.0 as i64;
        if span <= 0 {
            span += self.range;
        }
        span
    }

    /// Midpoint of `[start, end)`, or `None` when the span is too small to
    /// have an interior position (span <= 1).
    pub fn midpoint(&self, start: RingPosition, end: RingPosition) -> Option<RingPosition> {
        let span = self.span_of(start, end);
        if span <= 1 {
            return None;
        }
        Some(RingPosition(space::fold(start.0 as i64 + span / 2)))
    }
}
