//! Homology Schemes: Generating the Two-Dimensional Cells
//!
//! All schemes agree on dimensions 0 and 1: one `Node` per vertex at its
//! filtration time, one `Edge` per ordered pair with a finite entrance
//! time (existing edges and shortcuts alike). They differ only in which
//! two-cells bound the cycles, so the trait has a single required
//! operation, [`Homology::two_cells`].
//!
//! ## Schemes
//!
//! - [`RegularPathHomology`]: the basis for regular path homology, built
//!   from two-paths with bridge bookkeeping, collapsing triangles and long
//!   squares
//! - [`DirectedFlagHomology`]: directed flag complex triangles
//! - [`OrderedTuplesHomology`]: ordered-tuple complex, directed flag plus
//!   double edges

mod directed_flag;
mod ordered_tuples;
mod regular_path;

pub use directed_flag::DirectedFlagHomology;
pub use ordered_tuples::OrderedTuplesHomology;
pub use regular_path::RegularPathHomology;

use crate::cell::{Cell, FilteredCell};
use crate::error::{Error, Result};
use crate::filtration::Filtration;
use crate::graph::NodeId;
use std::collections::HashMap;

/// A policy producing the dimension-2 cells of a filtration
pub trait Homology {
    /// Two-cells with their entrance times
    fn two_cells<V: NodeId, F: Filtration<V>>(&self, filtration: &F) -> Vec<FilteredCell<V>>;

    /// Cells of the requested dimensions, in the given dimension order
    ///
    /// Dimensions outside {0, 1, 2} report
    /// [`Error::UnsupportedDimension`].
    fn cells<V: NodeId, F: Filtration<V>>(
        &self,
        dimensions: &[usize],
        filtration: &F,
    ) -> Result<Vec<FilteredCell<V>>> {
        let mut cells = Vec::new();
        for &dimension in dimensions {
            match dimension {
                0 => cells.extend(zero_cells(filtration)),
                1 => cells.extend(one_cells(filtration)),
                2 => cells.extend(self.two_cells(filtration)),
                other => return Err(Error::UnsupportedDimension(other)),
            }
        }
        Ok(cells)
    }
}

/// One `Node` per vertex at its filtration time
pub fn zero_cells<V: NodeId, F: Filtration<V>>(filtration: &F) -> Vec<FilteredCell<V>> {
    filtration
        .node_times()
        .into_iter()
        .map(|(node, time)| FilteredCell::new(Cell::Node(node), time))
        .collect()
}

/// One `Edge` per ordered pair with finite entrance time
pub fn one_cells<V: NodeId, F: Filtration<V>>(filtration: &F) -> Vec<FilteredCell<V>> {
    filtration
        .edge_times()
        .into_iter()
        .map(|((source, target), time)| FilteredCell::new(Cell::Edge(source, target), time))
        .collect()
}

/// All two-paths source → midpoint → target with both hops finite, with
/// the provisional entrance time max(first hop, second hop)
///
/// Sorted ascending by time; ties broken on (source, midpoint, target) so
/// bridge arrival order is deterministic.
pub(crate) fn sorted_two_paths<V: NodeId>(
    map: &HashMap<V, HashMap<V, f64>>,
) -> Vec<(V, V, V, f64)> {
    let mut paths = Vec::new();
    for (&source, hops) in map {
        for (&midpoint, &first_hop) in hops {
            if let Some(onward) = map.get(&midpoint) {
                for (&target, &second_hop) in onward {
                    paths.push((source, midpoint, target, first_hop.max(second_hop)));
                }
            }
        }
    }
    paths.sort_by(|a, b| {
        a.3.total_cmp(&b.3)
            .then_with(|| (a.0, a.1, a.2).cmp(&(b.0, b.1, b.2)))
    });
    paths
}
