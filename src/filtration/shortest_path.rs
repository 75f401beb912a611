//! Shortest-Path Filtration
//!
//! The canonical filtration for path homology: an ordered pair (u, v)
//! enters at the shortest-path distance from u to v, so "shortcut" pairs
//! with no direct edge still become one-cells once any directed path
//! connects them. Nodes all enter at time 0.
//!
//! Distances are precomputed once per input graph with Dijkstra from every
//! source; this is the dominant sequential cost of a pipeline leaf.

use super::{Filtration, Grounded};
use crate::error::Result;
use crate::graph::{Digraph, NodeId};
use petgraph::algo::dijkstra;
use std::collections::HashMap;

/// All-pairs shortest-path entrance times
#[derive(Debug, Clone)]
pub struct ShortestPathFiltration<V> {
    /// Nodes in sorted order
    nodes: Vec<V>,
    /// source → target → distance, excluding self-pairs and unreachable
    /// targets
    distances: HashMap<V, HashMap<V, f64>>,
}

impl<V: NodeId> ShortestPathFiltration<V> {
    /// Run Dijkstra from every node of `graph`
    ///
    /// Edge weights must be non-negative.
    pub fn new(graph: &Digraph<V>) -> Self {
        let mut nodes: Vec<V> = graph.nodes().collect();
        nodes.sort();

        let mut distances = HashMap::with_capacity(nodes.len());
        for &source in &nodes {
            let reached = dijkstra(graph, source, None, |edge| *edge.2);
            let row: HashMap<V, f64> = reached
                .into_iter()
                .filter(|&(target, _)| target != source)
                .collect();
            distances.insert(source, row);
        }

        Self { nodes, distances }
    }
}

impl<V: NodeId> Filtration<V> for ShortestPathFiltration<V> {
    type Grounded = Grounded<V, Self>;

    fn node_time(&self, _node: V) -> f64 {
        0.0
    }

    fn edge_time(&self, source: V, target: V) -> f64 {
        self.distances
            .get(&source)
            .and_then(|row| row.get(&target))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn node_times(&self) -> Vec<(V, f64)> {
        self.nodes.iter().map(|&node| (node, 0.0)).collect()
    }

    fn edge_times(&self) -> Vec<((V, V), f64)> {
        let mut edges: Vec<((V, V), f64)> = self
            .distances
            .iter()
            .flat_map(|(&source, row)| {
                row.iter()
                    .map(move |(&target, &time)| ((source, target), time))
            })
            .collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0));
        edges
    }

    fn distance_map(&self) -> HashMap<V, HashMap<V, f64>> {
        self.distances.clone()
    }

    /// The node set of a shortest-path filtration is exactly the node set
    /// of its graph, so grounding yields the proper variant with every node
    /// time pinned to 0
    fn ground(self, base: &Digraph<V>) -> Result<Self::Grounded> {
        Ok(Grounded::proper(self, base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Digraph<u32> {
        let mut g = Digraph::new();
        g.add_edge(0, 1, 2.0);
        g.add_edge(1, 2, 3.0);
        g
    }

    #[test]
    fn test_shortcut_pairs_enter() {
        let filtration = ShortestPathFiltration::new(&path_graph());
        assert_eq!(filtration.edge_time(0, 1), 2.0);
        // No direct edge, but the pair enters at the path distance
        assert_eq!(filtration.edge_time(0, 2), 5.0);
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let filtration = ShortestPathFiltration::new(&path_graph());
        assert!(filtration.edge_time(2, 0).is_infinite());
        // And excluded from the iterators and the map
        assert_eq!(filtration.edge_times().len(), 3);
        assert!(filtration.distance_map()[&2].is_empty());
    }

    #[test]
    fn test_self_pairs_excluded() {
        let filtration = ShortestPathFiltration::new(&path_graph());
        assert!(!filtration.distance_map()[&0].contains_key(&0));
    }

    #[test]
    fn test_shorter_route_wins() {
        let mut g = path_graph();
        g.add_edge(0, 2, 10.0);
        let filtration = ShortestPathFiltration::new(&g);
        // The two-hop route undercuts the direct edge weight
        assert_eq!(filtration.edge_time(0, 2), 5.0);
    }
}
