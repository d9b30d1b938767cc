//! Replica locator: record identifier → set of ring positions.
//!
//! # Algorithm
//!
//! 1. Hash the record identifier to a 32-bit ring position
//! 2. Emit the position, then advance clockwise by the replica step
//! 3. Repeat until `replication_factor` positions have been emitted
//!
//! The replica step is `floor((2 * MAX - 1) / replication_factor)`. This is
//! an approximation of `2^32 / replication_factor`, off by a few positions
//! near the pole. The divisor is a compatibility constraint: changing it to
//! the exact span would move keys between owners on live deployments.
//!
//! # Performance
//!
//! - **Time**: O(r log r) where r = replication factor (set insertion)
//! - **Space**: O(r)

use std::collections::BTreeSet;

use corelib::error::{Error, Result};
use corelib::partitioner::Partitioner;
use corelib::ring::{space, RingPosition};

/// The ring positions that must each hold a replica of one record.
pub type ReplicaSet = BTreeSet<RingPosition>;

/// Locates the replica positions for tenant records.
///
/// Stateless apart from the partitioner; safe to share across threads. The
/// replication factor is supplied per call so one locator serves tenants
/// configured with different factors.
#[derive(Clone, Debug)]
pub struct ReplicaLocator<P: Partitioner> {
    partitioner: P,
}

impl<P: Partitioner> ReplicaLocator<P> {
    pub fn new(partitioner: P) -> Self {
        Self { partitioner }
    }

    /// Computes the replica positions for a record identifier.
    ///
    /// Deterministic: the same identifier and factor always produce the
    /// identical set. Fails with `InvalidArgument` when
    /// `replication_factor < 1`.
    pub fn locate(&self, id: &str, replication_factor: i64) -> Result<ReplicaSet> {
        let position = self.partitioner.position(id.as_bytes());
        self.replicas_of(position, replication_factor)
    }

    /// Computes the replica positions starting from an already hashed
    /// position.
    ///
    /// Exposed for routing layers that pre-hash identifiers.
    pub fn replicas_of(
        &self,
        position: RingPosition,
        replication_factor: i64,
    ) -> Result<ReplicaSet> {
        if replication_factor < 1 {
            return Err(Error::invalid(
                "replication factor must be greater than zero",
            ));
        }

        let mut replicas = ReplicaSet::new();
        if replication_factor == 1 {
            replicas.insert(position);
            return Ok(replicas);
        }

        let step = (2 * space::MAX as i64 - 1) / replication_factor;
        let mut current = position;
        for _ in 0..replication_factor {
            replicas.insert(current);
            current = current.offset(step);
        }
        Ok(replicas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::partitioner::Xxh32Partitioner;

    fn locator() -> ReplicaLocator<Xxh32Partitioner> {
        ReplicaLocator::new(Xxh32Partitioner::new())
    }

    fn positions(set: &ReplicaSet) -> Vec<i32> {
        set.iter().map(|p| p.0).collect()
    }

    #[test]
    fn test_three_replicas_from_position_ten() {
        let replicas = locator().replicas_of(RingPosition(10), 3).unwrap();
        let mut expected = vec![10, 1_431_655_774, -1_431_655_757];
        expected.sort();
        assert_eq!(positions(&replicas), expected);
    }

    #[test]
    fn test_four_replicas_from_position_ten() {
        let replicas = locator().replicas_of(RingPosition(10), 4).unwrap();
        let mut expected = vec![10, 1_073_741_833, -2_147_483_639, -1_073_741_816];
        expected.sort();
        assert_eq!(positions(&replicas), expected);
    }

    #[test]
    fn test_single_replica_is_the_bare_hash() {
        let replicas = locator().replicas_of(RingPosition(-77), 1).unwrap();
        assert_eq!(positions(&replicas), vec![-77]);

        let hashed = locator().locate("tenant-9/doc-1", 1).unwrap();
        let direct = Xxh32Partitioner::new().position(b"tenant-9/doc-1");
        assert_eq!(hashed.into_iter().collect::<Vec<_>>(), vec![direct]);
    }

    #[test]
    fn test_locate_is_deterministic() {
        let first = locator().locate("tenant-3/record-15", 5).unwrap();
        let second = locator().locate("tenant-3/record-15", 5).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_replicas_are_distinct() {
        for factor in 1..=8 {
            let replicas = locator().replicas_of(RingPosition(123_456), factor).unwrap();
            assert_eq!(replicas.len(), factor as usize, "factor={factor}");
        }
    }

    #[test]
    fn test_rejects_non_positive_factor() {
        assert!(matches!(
            locator().locate("key", 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            locator().replicas_of(RingPosition(1), -2),
            Err(Error::InvalidArgument(_))
        ));
    }
}
