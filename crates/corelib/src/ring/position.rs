//! Ring position implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ring::space;

/// A position on the hash ring.
///
/// Newtype over `i32` so positions are `Copy`, ordered, and cheap to compare
/// and hash. Ordering is the plain numeric ordering; circular "after"
/// semantics live in [`offset`](RingPosition::offset) and the span math on
/// [`RingMetadata`](crate::ring::RingMetadata).
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
pub struct RingPosition(pub i32);

impl RingPosition {
    /// Smallest position on the ring.
    pub const MIN: RingPosition = RingPosition(space::MIN);

    /// Largest position on the ring.
    pub const MAX: RingPosition = RingPosition(space::MAX);

    /// Advances this position clockwise by `step`, wrapping past the maximum
    /// back through the minimum.
    pub fn offset(self, step: i64) -> RingPosition {
        RingPosition(space::fold(self.0 as i64 + step))
    }

    /// Clockwise distance from `self` to `other` over the full ring.
    ///
    /// Zero when the positions are equal.
    pub fn distance_to(self, other: RingPosition) -> i64 {
        let distance = other.0 as i64 - self.0 as i64;
        if distance < 0 {
            distance + space::TOTAL_SPAN
        } else {
            distance
        }
    }
}

impl fmt::Display for RingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RingPosition {
    fn from(value: i32) -> Self {
        RingPosition(value)
    }
}
