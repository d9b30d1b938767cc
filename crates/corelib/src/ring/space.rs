//! Constants and wraparound arithmetic for the circular 32-bit key space.
//!
//! The ring covers every `i32` value; the position after `MAX` wraps to
//! `MIN`. Naive `i32` addition overflows, so all forward arithmetic is done
//! in `i64` and folded back onto the ring.

/// Smallest position on the ring.
pub const MIN: i32 = i32::MIN;

/// Largest position on the ring.
pub const MAX: i32 = i32::MAX;

/// Total number of positions on the ring (`2^32`), computed without
/// overflowing `i32`.
pub const TOTAL_SPAN: i64 = -(MIN as i64) + (MAX as i64) + 1;

/// Folds a forward (clockwise) `i64` value back into position range.
///
/// Values past `MAX` re-enter from the opposite pole: subtract the maximum,
/// then add the minimum. A single application suffices because no caller
/// advances by more than one full revolution.
pub fn fold(value: i64) -> i32 {
    let folded = if value > MAX as i64 {
        value - MAX as i64 + MIN as i64
    } else {
        value
    };
    folded as i32
}
