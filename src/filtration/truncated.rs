//! Truncated Filtrations
//!
//! Clamps every entrance time strictly above a threshold to +∞ and filters
//! the iterators and the distance map to match. Used by the cone-time
//! optimisation to shrink the cell basis without changing the barcode.

use super::Filtration;
use crate::error::Result;
use crate::graph::{Digraph, NodeId};
use std::collections::HashMap;

/// Filtration decorator discarding everything after a horizon
#[derive(Debug, Clone)]
pub struct Truncated<F> {
    inner: F,
    horizon: f64,
}

impl<F> Truncated<F> {
    pub fn new(inner: F, horizon: f64) -> Self {
        Self { inner, horizon }
    }
}

impl<V: NodeId, F: Filtration<V>> Filtration<V> for Truncated<F> {
    type Grounded = Truncated<F::Grounded>;

    fn node_time(&self, node: V) -> f64 {
        let time = self.inner.node_time(node);
        if time > self.horizon {
            f64::INFINITY
        } else {
            time
        }
    }

    fn edge_time(&self, source: V, target: V) -> f64 {
        let time = self.inner.edge_time(source, target);
        if time > self.horizon {
            f64::INFINITY
        } else {
            time
        }
    }

    fn node_times(&self) -> Vec<(V, f64)> {
        self.inner
            .node_times()
            .into_iter()
            .filter(|&(_, time)| time <= self.horizon)
            .collect()
    }

    fn edge_times(&self) -> Vec<((V, V), f64)> {
        self.inner
            .edge_times()
            .into_iter()
            .filter(|&(_, time)| time <= self.horizon)
            .collect()
    }

    fn distance_map(&self) -> HashMap<V, HashMap<V, f64>> {
        self.inner
            .distance_map()
            .into_iter()
            .map(|(source, row)| {
                let row = row
                    .into_iter()
                    .filter(|&(_, time)| time <= self.horizon)
                    .collect();
                (source, row)
            })
            .collect()
    }

    /// Truncate first, ground afterwards: the base graph still enters at 0
    /// while late shortcuts stay clamped
    fn ground(self, base: &Digraph<V>) -> Result<Self::Grounded> {
        Ok(Truncated::new(self.inner.ground(base)?, self.horizon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtration::ShortestPathFiltration;

    fn long_path() -> Digraph<u32> {
        let mut g = Digraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        g
    }

    #[test]
    fn test_times_clamp_to_infinity() {
        let truncated = Truncated::new(ShortestPathFiltration::new(&long_path()), 2.0);
        assert_eq!(truncated.edge_time(0, 2), 2.0);
        assert!(truncated.edge_time(0, 3).is_infinite());
    }

    #[test]
    fn test_iterators_filter() {
        let truncated = Truncated::new(ShortestPathFiltration::new(&long_path()), 2.0);
        // (0,3) at time 3 is the only pair beyond the horizon
        assert_eq!(truncated.edge_times().len(), 5);
        assert!(!truncated.distance_map()[&0].contains_key(&3));
    }

    #[test]
    fn test_grounding_composes() {
        let g = long_path();
        let grounded = Truncated::new(ShortestPathFiltration::new(&g), 2.0)
            .ground(&g)
            .unwrap();
        // Base edges are re-pinned to 0 after truncation
        assert_eq!(grounded.edge_time(2, 3), 0.0);
        // Late shortcuts stay truncated
        assert!(grounded.edge_time(0, 3).is_infinite());
    }
}
