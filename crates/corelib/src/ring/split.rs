//! Even-split boundary calculation over the full key space.

use crate::error::{Error, Result};
use crate::ring::position::RingPosition;
use crate::ring::space;

/// Returns the ordered boundary positions that cut the full ring into
/// `divisions` approximately equal arcs, starting at the minimum position.
///
/// When `2^32` is not evenly divisible by `divisions` the walk may emit a
/// final boundary whose arc to the wrap point is narrower than the others;
/// this is accepted, not corrected.
///
/// Fails with `InvalidArgument` when `divisions < 1`, or when `divisions`
/// exceeds the span (the per-division step would be zero and the walk would
/// never advance).
pub fn even_boundaries(divisions: i64) -> Result<Vec<RingPosition>> {
    if divisions < 1 {
        return Err(Error::invalid("divisions must be greater than zero"));
    }
    if divisions > space::TOTAL_SPAN {
        return Err(Error::invalid(
            "divisions cannot be greater than the range of the ring",
        ));
    }

    let step = space::TOTAL_SPAN / divisions;
    let mut boundaries = Vec::with_capacity(divisions as usize);
    let mut current = space::MIN as i64;
    while current < space::MAX as i64 {
        boundaries.push(RingPosition(current as i32));
        current += step;
    }
    Ok(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_division_is_the_minimum_alone() {
        assert_eq!(even_boundaries(1).unwrap(), vec![RingPosition::MIN]);
    }

    #[test]
    fn test_three_divisions() {
        let boundaries = even_boundaries(3).unwrap();
        assert_eq!(
            boundaries,
            vec![
                RingPosition(i32::MIN),
                RingPosition(-715_827_883),
                RingPosition(715_827_882),
            ]
        );
    }

    #[test]
    fn test_four_divisions_are_exact() {
        let boundaries = even_boundaries(4).unwrap();
        assert_eq!(
            boundaries,
            vec![
                RingPosition(i32::MIN),
                RingPosition(-1_073_741_824),
                RingPosition(0),
                RingPosition(1_073_741_824),
            ]
        );
    }

    #[test]
    fn test_rejects_non_positive_divisions() {
        assert!(matches!(
            even_boundaries(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            even_boundaries(-3),
            Err(Error::InvalidArgument(_))
        ));
    }
}
