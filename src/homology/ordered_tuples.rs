//! Ordered Tuples Basis
//!
//! Directed flag triangles plus a `DoubleEdge` for every two-path that
//! returns to its source, entering at max(first hop, second hop).

use super::{sorted_two_paths, Homology};
use crate::cell::{Cell, FilteredCell};
use crate::filtration::Filtration;
use crate::graph::NodeId;

/// Basis generator for the ordered-tuple complex
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedTuplesHomology;

impl Homology for OrderedTuplesHomology {
    fn two_cells<V: NodeId, F: Filtration<V>>(&self, filtration: &F) -> Vec<FilteredCell<V>> {
        let map = filtration.distance_map();
        let mut cells = Vec::new();
        for (source, midpoint, target, hops) in sorted_two_paths(&map) {
            if source == target {
                cells.push(FilteredCell::new(Cell::DoubleEdge(source, midpoint), hops));
            } else {
                let direct = filtration.edge_time(source, target);
                if direct.is_finite() {
                    cells.push(FilteredCell::new(
                        Cell::DirectedTriangle(source, midpoint, target),
                        hops.max(direct),
                    ));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtration::ShortestPathFiltration;
    use crate::graph::Digraph;

    #[test]
    fn test_round_trips_span_double_edges() {
        let mut g = Digraph::new();
        g.add_edge(0u32, 1, 2.0);
        g.add_edge(1, 0, 4.0);

        let cells = OrderedTuplesHomology.two_cells(&ShortestPathFiltration::new(&g));
        assert_eq!(cells.len(), 2);
        assert!(cells
            .iter()
            .all(|c| matches!(c.cell, Cell::DoubleEdge(_, _)) && c.entrance_time == 4.0));
    }
}
