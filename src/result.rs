//! Barcode Assembly and Betti Curves
//!
//! Converts the solver's index pairing back into entrance times. Only
//! dimension-1 births produce bars: a pair whose birth cell is an edge
//! yields [birth, death] unless the two times coincide (zero persistence
//! is dropped silently), and every unpaired edge yields [birth, +∞].
//!
//! Results from independent subcomputations merge by multiset union; the
//! decomposition decorators rely on this being order-insensitive.

use crate::cell::{Cell, FilteredCell};
use crate::graph::NodeId;
use ndarray::Array1;

/// A persistence interval [birth, death); death may be +∞
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub birth: f64,
    pub death: f64,
}

impl Bar {
    pub fn new(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Barcode with optional representative cycles
///
/// `reps` is kept parallel to `barcode`; entries are `None` when the
/// solver did not report representatives.
#[derive(Debug, Clone, Default)]
pub struct PersistenceResult<V> {
    pub barcode: Vec<Bar>,
    pub reps: Vec<Option<Vec<Cell<V>>>>,
}

impl<V: NodeId> PersistenceResult<V> {
    pub fn empty() -> Self {
        Self {
            barcode: Vec::new(),
            reps: Vec::new(),
        }
    }

    fn add_bar(&mut self, bar: Bar, rep: Option<Vec<Cell<V>>>) {
        self.barcode.push(bar);
        self.reps.push(rep);
    }

    /// Translate persistence pairs into bars
    ///
    /// `reps`, when present, is parallel to `pairs` and holds basis
    /// indices of the killed cycles.
    pub fn add_paired(
        &mut self,
        pairs: &[(usize, usize)],
        basis: &[FilteredCell<V>],
        reps: Option<&[Vec<usize>]>,
    ) {
        for (position, &(birth, death)) in pairs.iter().enumerate() {
            let birth_time = basis[birth].entrance_time;
            let death_time = basis[death].entrance_time;
            // Zero-persistence pairs carry no feature
            if birth_time == death_time {
                continue;
            }
            if basis[birth].dimension() != 1 {
                continue;
            }
            let rep = reps.map(|all| resolve_rep(&all[position], basis));
            self.add_bar(Bar::new(birth_time, death_time), rep);
        }
    }

    /// Every unpaired dimension-1 cell is an essential feature
    pub fn add_unpaired(
        &mut self,
        unpaired: &[usize],
        basis: &[FilteredCell<V>],
        reps: Option<&[Vec<usize>]>,
    ) {
        for (position, &index) in unpaired.iter().enumerate() {
            if basis[index].dimension() != 1 {
                continue;
            }
            let rep = reps.map(|all| resolve_rep(&all[position], basis));
            self.add_bar(
                Bar::new(basis[index].entrance_time, f64::INFINITY),
                rep,
            );
        }
    }

    /// Append another result's bars and representatives
    pub fn extend(&mut self, other: PersistenceResult<V>) {
        self.barcode.extend(other.barcode);
        self.reps.extend(other.reps);
    }

    /// Multiset union of independent results
    pub fn merge(results: impl IntoIterator<Item = PersistenceResult<V>>) -> Self {
        let mut merged = Self::empty();
        for result in results {
            merged.extend(result);
        }
        merged
    }

    /// Number of features alive at each query time
    ///
    /// A bar [b, d) counts at time t when b ≤ t < d.
    pub fn betti_curve(&self, times: &Array1<f64>) -> Array1<usize> {
        Array1::from_iter(times.iter().map(|&t| {
            self.barcode
                .iter()
                .filter(|bar| bar.birth <= t && t < bar.death)
                .count()
        }))
    }
}

/// Map solver row indices back to their dimension-1 cells
fn resolve_rep<V: NodeId>(indices: &[usize], basis: &[FilteredCell<V>]) -> Vec<Cell<V>> {
    indices.iter().map(|&index| basis[index].cell).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn edge_basis() -> Vec<FilteredCell<u32>> {
        vec![
            FilteredCell::new(Cell::Node(0), 0.0),
            FilteredCell::new(Cell::Node(1), 0.0),
            FilteredCell::new(Cell::Edge(0, 1), 0.0),
            FilteredCell::new(Cell::Edge(1, 0), 1.0),
            FilteredCell::new(Cell::DoubleEdge(0, 1), 3.0),
        ]
    }

    #[test]
    fn test_zero_persistence_dropped() {
        let basis = edge_basis();
        let mut result = PersistenceResult::empty();
        // (1, 2) pairs at equal times and is dropped; (3, 4) is an edge
        // born at 1 dying at 3
        result.add_paired(&[(1, 2), (3, 4)], &basis, None);
        assert_eq!(result.barcode, vec![Bar::new(1.0, 3.0)]);
    }

    #[test]
    fn test_unpaired_edges_are_essential() {
        let basis = edge_basis();
        let mut result = PersistenceResult::empty();
        result.add_unpaired(&[0, 3], &basis, None);
        assert_eq!(result.barcode.len(), 1);
        assert!(result.barcode[0].is_essential());
        assert_eq!(result.barcode[0].birth, 1.0);
    }

    #[test]
    fn test_merge_is_multiset_union() {
        let mut left: PersistenceResult<u32> = PersistenceResult::empty();
        left.add_bar(Bar::new(0.0, 1.0), None);
        let mut right: PersistenceResult<u32> = PersistenceResult::empty();
        right.add_bar(Bar::new(0.0, 1.0), None);
        right.add_bar(Bar::new(0.0, f64::INFINITY), None);

        let merged = PersistenceResult::merge([left, right]);
        assert_eq!(merged.barcode.len(), 3);
        assert_eq!(merged.reps.len(), 3);
    }

    #[test]
    fn test_betti_curve() {
        let mut result: PersistenceResult<u32> = PersistenceResult::empty();
        result.add_bar(Bar::new(0.0, 2.0), None);
        result.add_bar(Bar::new(1.0, f64::INFINITY), None);

        let curve = result.betti_curve(&array![0.0, 1.0, 2.0, 10.0]);
        assert_eq!(curve, array![1, 2, 1, 1]);
    }
}
