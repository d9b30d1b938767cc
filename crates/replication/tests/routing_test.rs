//! End-to-end routing: record identifier → replica positions → owning
//! ranges.

use std::collections::BTreeSet;

use corelib::partitioner::Xxh32Partitioner;
use corelib::ring::PartitionBuilder;
use replication::ReplicaLocator;

#[test]
fn test_every_replica_position_has_an_owner() {
    let (map, metadata) = PartitionBuilder::new().build_full(8, 3).unwrap();
    let locator = ReplicaLocator::new(Xxh32Partitioner::new());

    for record in 0..100 {
        let id = format!("tenant-7/record-{record}");
        let replicas = locator.locate(&id, 3).unwrap();
        assert_eq!(replicas.len(), 3);
        for position in &replicas {
            let owner = map.owner_of(*position).expect("covered ring has an owner");
            assert!(owner.span(&metadata) >= 1);
        }
    }
}

#[test]
fn test_replicas_spread_across_distinct_ranges() {
    // With replicas spaced a third of the ring apart and eight even ranges,
    // the three replicas of any record always land in three different
    // ranges.
    let (map, _metadata) = PartitionBuilder::new().build_full(8, 3).unwrap();
    let locator = ReplicaLocator::new(Xxh32Partitioner::new());

    for record in 0..100 {
        let id = format!("tenant-7/record-{record}");
        let replicas = locator.locate(&id, 3).unwrap();
        let owners: BTreeSet<_> = replicas
            .iter()
            .map(|p| map.owner_of(*p).unwrap().id())
            .collect();
        assert_eq!(owners.len(), 3, "record {id} collapsed onto fewer ranges");
    }
}
