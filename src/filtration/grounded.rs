//! Grounded Filtrations
//!
//! Grounding forces all structure of a fixed base graph G to enter at time
//! 0 while everything outside G keeps its original time. Persistent path
//! homology of the grounded filtration then measures how cycles of G are
//! filled in by the ambient shortest-path structure.
//!
//! Two variants share this type:
//!
//! - standard: node and edge times consult membership in G
//! - proper: additionally every node time is 0, valid when the grounded
//!   node set already matches G (as it does for a shortest-path filtration
//!   built over G itself)

use super::Filtration;
use crate::error::{Error, Result};
use crate::graph::{Digraph, NodeId};
use std::collections::{BTreeSet, HashMap};

/// Filtration decorator pinning a base graph to time 0
#[derive(Debug, Clone)]
pub struct Grounded<V, F> {
    inner: F,
    base_nodes: BTreeSet<V>,
    base_edges: BTreeSet<(V, V)>,
    /// Proper variant: all node times are 0 outright
    proper: bool,
}

impl<V: NodeId, F: Filtration<V>> Grounded<V, F> {
    /// Standard grounding over an arbitrary base graph
    pub fn standard(inner: F, base: &Digraph<V>) -> Self {
        Self::build(inner, base, false)
    }

    /// Proper grounding; only correct when the grounded node set matches
    /// the base graph's
    pub fn proper(inner: F, base: &Digraph<V>) -> Self {
        Self::build(inner, base, true)
    }

    fn build(inner: F, base: &Digraph<V>, proper: bool) -> Self {
        Self {
            inner,
            base_nodes: base.nodes().collect(),
            base_edges: base.all_edges().map(|(u, v, _)| (u, v)).collect(),
            proper,
        }
    }
}

impl<V: NodeId, F: Filtration<V>> Filtration<V> for Grounded<V, F> {
    type Grounded = Self;

    fn node_time(&self, node: V) -> f64 {
        if self.proper || self.base_nodes.contains(&node) {
            0.0
        } else {
            self.inner.node_time(node)
        }
    }

    fn edge_time(&self, source: V, target: V) -> f64 {
        if self.base_edges.contains(&(source, target)) {
            0.0
        } else {
            self.inner.edge_time(source, target)
        }
    }

    fn node_times(&self) -> Vec<(V, f64)> {
        if self.proper {
            return self.inner.node_times();
        }
        let mut nodes: Vec<(V, f64)> =
            self.base_nodes.iter().map(|&node| (node, 0.0)).collect();
        nodes.extend(
            self.inner
                .node_times()
                .into_iter()
                .filter(|(node, _)| !self.base_nodes.contains(node)),
        );
        nodes
    }

    fn edge_times(&self) -> Vec<((V, V), f64)> {
        let mut edges: Vec<((V, V), f64)> =
            self.base_edges.iter().map(|&edge| (edge, 0.0)).collect();
        edges.extend(
            self.inner
                .edge_times()
                .into_iter()
                .filter(|(edge, _)| !self.base_edges.contains(edge)),
        );
        edges
    }

    fn distance_map(&self) -> HashMap<V, HashMap<V, f64>> {
        let mut map = self.inner.distance_map();
        for &(source, target) in &self.base_edges {
            map.entry(source).or_default().insert(target, 0.0);
        }
        map
    }

    fn ground(self, _base: &Digraph<V>) -> Result<Self> {
        Err(Error::InvalidOperation(
            "filtration is already grounded",
        ))
    }
}
