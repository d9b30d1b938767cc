//! Core library for the hash-ring partitioning engine.
//!
//! This crate provides the fundamental abstractions for partitioning a
//! circular 32-bit key space across storage nodes:
//! - Ring positions and wraparound arithmetic
//! - Node ranges (contiguous, possibly wrapping arcs of the ring)
//! - The partition map and its coverage invariant
//! - Ring metadata (range, replication factor, replication distance)
//! - Even-split boundary calculation and initial partition building
//! - Partitioner algorithms (key hashing)
//! - Node identity

pub mod error;
pub mod node;
pub mod partitioner;
pub mod ring;

pub use error::{Error, Result};
pub use node::{Node, NodeId};
pub use partitioner::Partitioner;
pub use ring::{
    even_boundaries, NodeRange, PartitionBuilder, PartitionMap, RangeId, RingMetadata,
    RingPosition,
};
