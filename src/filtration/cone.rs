//! Cone Time
//!
//! The earliest time at which some vertex has finite connections to every
//! other vertex (an out-cone apex) or from every other vertex (an in-cone
//! apex). Once the filtration contains a cone, dimension-1 features can no
//! longer change, so truncating at this horizon preserves the barcode while
//! discarding every later cell.

use super::Filtration;
use crate::graph::NodeId;

/// Earliest time at which the filtration contains a directed cone, +∞ if
/// it never does
pub fn cone_time<V: NodeId, F: Filtration<V>>(filtration: &F) -> f64 {
    let nodes: Vec<V> = filtration
        .node_times()
        .into_iter()
        .map(|(node, _)| node)
        .collect();
    let map = filtration.distance_map();
    let mut horizon = f64::INFINITY;

    // Out-cone: a source with finite paths to every other node becomes an
    // apex once its slowest path arrives
    for (&source, reached) in &map {
        let covers = nodes
            .iter()
            .all(|&node| node == source || reached.contains_key(&node));
        if covers {
            let apex = reached.values().fold(0.0_f64, |acc, &d| acc.max(d));
            horizon = horizon.min(apex);
        }
    }

    // In-cone: a node reachable from every other node
    for &node in &nodes {
        let covered = nodes.iter().all(|&other| {
            other == node
                || map
                    .get(&other)
                    .map_or(false, |row| row.contains_key(&node))
        });
        if covered {
            let apex = map
                .values()
                .filter_map(|row| row.get(&node))
                .fold(0.0_f64, |acc, &d| acc.max(d));
            horizon = horizon.min(apex);
        }
    }

    horizon
}
