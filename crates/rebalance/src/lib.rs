//! Incremental rebalancing for the hash ring.
//!
//! This crate provides the control-plane side of partition management:
//! - Splitting a node range at its midpoint
//! - Replacing a map entry with its replacements
//! - Growing a live partition map by exactly one node
//! - Selecting enabled physical nodes for new placements
//!
//! Growth mutates the single largest range only; the rest of the map is
//! untouched, so only one range's data ever moves.

pub mod engine;
pub mod placement;

pub use engine::RebalanceEngine;
pub use placement::{NodeAvailability, NodeRegistry, StaticRegistry};
