//! Replica location for the hash ring.
//!
//! This crate answers the read-path question: given a tenant record
//! identifier and a replication factor, which ring positions must each hold a
//! copy of the record? The caller maps each position to the range currently
//! owning it and thence to a physical node.

pub mod locator;

pub use locator::{ReplicaLocator, ReplicaSet};
