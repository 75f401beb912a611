//! Regular Path Homology Basis
//!
//! The two-cells of regular path homology are generated from the
//! two-paths of the filtration in entrance order:
//!
//! 1. A two-path returning to its source spans a `DoubleEdge`.
//! 2. A two-path whose endpoints are directly connected no later than the
//!    path itself spans a `DirectedTriangle`.
//! 3. Anything else is a *bridge*: a two-path waiting for its endpoints to
//!    be bounded. Bridges are buffered per endpoint pair in arrival order.
//! 4. When the endpoints of a bridged pair do become directly connected,
//!    one `DirectedTriangle` collapses the first-arriving bridge onto the
//!    direct connection, at the direct connection's entrance time.
//! 5. Every bridge after the first spans a `LongSquare` against the first
//!    bridge's midpoint, at the later bridge's own entrance time.
//!
//! The first-against-the-rest pairing is one consistent spanning choice
//! over the redundant two-path relations; applied uniformly it yields a
//! linearly independent basis. Changing the choice permutes representative
//! cycles but not the barcode.

use super::{sorted_two_paths, Homology};
use crate::cell::{Cell, FilteredCell};
use crate::filtration::Filtration;
use crate::graph::NodeId;
use std::collections::BTreeMap;

/// Basis generator for regular path homology
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPathHomology;

impl Homology for RegularPathHomology {
    fn two_cells<V: NodeId, F: Filtration<V>>(&self, filtration: &F) -> Vec<FilteredCell<V>> {
        let map = filtration.distance_map();
        let mut cells = Vec::new();
        // Bridges per endpoint pair, in arrival order
        let mut bridges: BTreeMap<(V, V), Vec<(V, f64)>> = BTreeMap::new();

        for (source, midpoint, target, time) in sorted_two_paths(&map) {
            if source == target {
                cells.push(FilteredCell::new(Cell::DoubleEdge(source, midpoint), time));
            } else if filtration.edge_time(source, target) <= time {
                cells.push(FilteredCell::new(
                    Cell::DirectedTriangle(source, midpoint, target),
                    time,
                ));
            } else {
                bridges
                    .entry((source, target))
                    .or_default()
                    .push((midpoint, time));
            }
        }

        // Collapse the first bridge of each pair onto the direct
        // connection once it exists; under truncation the connection may
        // never enter, in which case there is nothing to collapse onto
        for (&(source, target), pair_bridges) in &bridges {
            let collapse_time = filtration.edge_time(source, target);
            if collapse_time.is_finite() {
                cells.push(FilteredCell::new(
                    Cell::DirectedTriangle(source, pair_bridges[0].0, target),
                    collapse_time,
                ));
            }
        }

        // Remaining bridges each span a long square against the first
        for (&(source, target), pair_bridges) in &bridges {
            let first_midpoint = pair_bridges[0].0;
            for &(midpoint, time) in &pair_bridges[1..] {
                cells.push(FilteredCell::new(
                    Cell::LongSquare {
                        start: source,
                        midpoints: (first_midpoint, midpoint),
                        end: target,
                    },
                    time,
                ));
            }
        }

        cells
    }
}
