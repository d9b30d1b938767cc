//! xxHash32 partitioner implementation.

use xxhash_rust::xxh32::xxh32;

use crate::partitioner::traits::Partitioner;
use crate::ring::position::RingPosition;

/// Seed is fixed so the same key always lands on the same position, across
/// processes and restarts.
const SEED: u32 = 0x9747_b28c;

/// Partitioner hashing keys with 32-bit xxHash.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh32Partitioner;

impl Xxh32Partitioner {
    pub fn new() -> Self {
        Self
    }
}

impl Partitioner for Xxh32Partitioner {
    fn position(&self, key: &[u8]) -> RingPosition {
        RingPosition(xxh32(key, SEED) as i32)
    }

    fn name(&self) -> &'static str {
        "Xxh32Partitioner"
    }
}
