//! ringctl subcommands.
//!
//! Every command drives the pure partitioning core and prints the result;
//! nothing here talks to a registry, a configuration store, or the network.

use anyhow::Context;
use clap::Subcommand;
use serde::Serialize;

use corelib::partitioner::Xxh32Partitioner;
use corelib::ring::{even_boundaries, NodeRange, PartitionBuilder, PartitionMap, RingMetadata};
use rebalance::RebalanceEngine;
use replication::ReplicaLocator;

/// Result type for command execution.
pub type CommandResult = anyhow::Result<()>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the initial partition map for a fresh deployment.
    Build {
        /// Number of storage nodes.
        #[arg(long)]
        nodes: i64,
        /// Ring size; defaults to the full 32-bit space.
        #[arg(long)]
        range: Option<i64>,
        /// Replication factor.
        #[arg(long, default_value_t = 3)]
        replication: i64,
    },
    /// Build a map, then grow it one node at a time.
    Grow {
        /// Number of storage nodes in the initial map.
        #[arg(long)]
        nodes: i64,
        /// Ring size; defaults to the full 32-bit space.
        #[arg(long)]
        range: Option<i64>,
        /// Replication factor.
        #[arg(long, default_value_t = 3)]
        replication: i64,
        /// Number of growth steps to apply.
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },
    /// Locate the replica positions for a record identifier.
    Locate {
        /// Record identifier, e.g. "tenant-42/record-7".
        id: String,
        /// Replication factor.
        #[arg(long, default_value_t = 3)]
        replication: i64,
    },
    /// Print the boundaries cutting the ring into even arcs.
    Boundaries {
        /// Number of divisions.
        divisions: i64,
    },
    /// Build a map and verify its coverage invariant.
    Check {
        /// Number of storage nodes.
        #[arg(long)]
        nodes: i64,
        /// Ring size; defaults to the full 32-bit space.
        #[arg(long)]
        range: Option<i64>,
        /// Replication factor.
        #[arg(long, default_value_t = 3)]
        replication: i64,
        /// Growth steps to apply before checking.
        #[arg(long, default_value_t = 0)]
        steps: usize,
    },
}

#[derive(Serialize)]
struct RangeRow {
    id: String,
    start: i32,
    end: i32,
    span: i64,
}

impl Command {
    pub fn execute(self, json: bool) -> CommandResult {
        match self {
            Command::Build {
                nodes,
                range,
                replication,
            } => {
                let (map, metadata) = build(nodes, range, replication)?;
                print_map(&map, &metadata, json)
            }
            Command::Grow {
                nodes,
                range,
                replication,
                steps,
            } => {
                let (map, metadata) = build(nodes, range, replication)?;
                let grown = grow(&metadata, map, steps)?;
                print_map(&grown, &metadata, json)
            }
            Command::Locate { id, replication } => {
                let locator = ReplicaLocator::new(Xxh32Partitioner::new());
                let replicas = locator
                    .locate(&id, replication)
                    .with_context(|| format!("locating replicas for {id:?}"))?;
                let positions: Vec<i32> = replicas.iter().map(|p| p.0).collect();
                if json {
                    println!("{}", serde_json::to_string_pretty(&positions)?);
                } else {
                    for position in positions {
                        println!("{position}");
                    }
                }
                Ok(())
            }
            Command::Boundaries { divisions } => {
                let boundaries =
                    even_boundaries(divisions).context("computing even-split boundaries")?;
                let positions: Vec<i32> = boundaries.iter().map(|p| p.0).collect();
                if json {
                    println!("{}", serde_json::to_string_pretty(&positions)?);
                } else {
                    for position in positions {
                        println!("{position}");
                    }
                }
                Ok(())
            }
            Command::Check {
                nodes,
                range,
                replication,
                steps,
            } => {
                let (map, metadata) = build(nodes, range, replication)?;
                let grown = grow(&metadata, map, steps)?;
                if grown.covers_ring(&metadata) {
                    println!("ok: {} ranges cover the ring", grown.len());
                    Ok(())
                } else {
                    anyhow::bail!("coverage invariant violated");
                }
            }
        }
    }
}

fn build(
    nodes: i64,
    range: Option<i64>,
    replication: i64,
) -> anyhow::Result<(PartitionMap, RingMetadata)> {
    let builder = PartitionBuilder::new();
    let built = match range {
        Some(range) => builder.build(nodes, range, replication),
        None => builder.build_full(nodes, replication),
    };
    built.context("building the partition map")
}

fn grow(
    metadata: &RingMetadata,
    mut map: PartitionMap,
    steps: usize,
) -> anyhow::Result<PartitionMap> {
    let engine = RebalanceEngine::new();
    for step in 0..steps {
        map = engine
            .increment_node_count(metadata, &map)
            .with_context(|| format!("growth step {}", step + 1))?;
    }
    Ok(map)
}

fn print_map(map: &PartitionMap, metadata: &RingMetadata, json: bool) -> CommandResult {
    if json {
        let rows: Vec<RangeRow> = map.ranges().map(|r| row(r, metadata)).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "ring range {} | replication factor {} | replication distance {}",
        metadata.range(),
        metadata.replication_factor(),
        metadata.replication_distance()
    );
    for range in map.ranges() {
        println!(
            "{:>12} .. {:>12}  span {:>12}  {}",
            range.start().0,
            range.end().0,
            range.span(metadata),
            range.id()
        );
    }
    Ok(())
}

fn row(range: &NodeRange, metadata: &RingMetadata) -> RangeRow {
    RangeRow {
        id: range.id().to_string(),
        start: range.start().0,
        end: range.end().0,
        span: range.span(metadata),
    }
}
