//! Partitioner abstraction for the hash ring.
//!
//! Partitioners are responsible for converting record keys into ring
//! positions.

pub mod traits;
pub mod xxh32;

pub use traits::Partitioner;
pub use xxh32::Xxh32Partitioner;
