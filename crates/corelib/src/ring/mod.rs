//! Hash ring partitioning primitives.
//!
//! The ring is the circular space of all 32-bit signed integer values. These
//! modules provide positions on that space, wraparound-safe arithmetic,
//! contiguous node ranges, the partition map covering the whole ring, and the
//! builders that produce an initial even partition.

pub mod builder;
pub mod map;
pub mod metadata;
pub mod position;
pub mod range;
pub mod space;
pub mod split;

pub use builder::PartitionBuilder;
pub use map::PartitionMap;
pub use metadata::RingMetadata;
pub use position::RingPosition;
pub use range::{NodeRange, RangeId};
pub use split::even_boundaries;
