//! Directed Flag Complex Basis
//!
//! Every two-path with distinct endpoints spans a `DirectedTriangle` as
//! soon as all three of its connections are present: entrance time is
//! max(first hop, second hop, direct connection). No bridge bookkeeping.
//!
//! Two-paths whose endpoints never connect produce no cell; a triangle at
//! +∞ would reference an edge cell that is not in the basis.

use super::{sorted_two_paths, Homology};
use crate::cell::{Cell, FilteredCell};
use crate::filtration::Filtration;
use crate::graph::NodeId;

/// Basis generator for the directed flag complex
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectedFlagHomology;

impl Homology for DirectedFlagHomology {
    fn two_cells<V: NodeId, F: Filtration<V>>(&self, filtration: &F) -> Vec<FilteredCell<V>> {
        let map = filtration.distance_map();
        sorted_two_paths(&map)
            .into_iter()
            .filter(|&(source, _, target, _)| source != target)
            .filter_map(|(source, midpoint, target, hops)| {
                let direct = filtration.edge_time(source, target);
                direct.is_finite().then(|| {
                    FilteredCell::new(
                        Cell::DirectedTriangle(source, midpoint, target),
                        hops.max(direct),
                    )
                })
            })
            .collect()
    }
}
