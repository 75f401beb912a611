//! Basis Ordering and Sparsification
//!
//! A valid filtration order puts every cell after its entire boundary:
//! sorting by (entrance time, dimension) suffices because a cell enters no
//! earlier than its faces and same-time ties are broken in favour of the
//! lower dimension. The sort is stable, so cells at equal (time,
//! dimension) keep their generation order.
//!
//! Sparsification then rewrites each boundary as sorted indices into the
//! already-indexed cells, producing the column format the solver consumes.

use crate::cell::{Cell, FilteredCell};
use crate::error::{Error, Result};
use crate::graph::NodeId;
use std::collections::HashMap;

/// One column of the sparse boundary matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseColumn {
    /// Dimension of the cell this column belongs to
    pub dimension: usize,
    /// Sorted indices of the boundary cells
    pub boundary: Vec<usize>,
}

/// Sort a cell basis by (entrance time ascending, dimension ascending)
pub fn sort_basis<V: NodeId>(cells: &mut [FilteredCell<V>]) {
    cells.sort_by(|a, b| {
        a.entrance_time
            .total_cmp(&b.entrance_time)
            .then_with(|| a.dimension().cmp(&b.dimension()))
    });
}

/// Rewrite a sorted basis as sparse boundary columns
///
/// Indices are 0-based insertion positions; the lookup maps are bucketed
/// per dimension. A boundary cell that was never indexed means the basis
/// is not closed under the boundary map and reports
/// [`Error::OutOfImage`].
pub fn sparsify<V: NodeId>(basis: &[FilteredCell<V>]) -> Result<Vec<SparseColumn>> {
    let mut index: [HashMap<Cell<V>, usize>; 3] = Default::default();
    let mut columns = Vec::with_capacity(basis.len());

    for (position, filtered) in basis.iter().enumerate() {
        let dimension = filtered.dimension();
        let mut boundary = Vec::new();
        for face in filtered.cell.boundary() {
            match index[dimension - 1].get(&face) {
                Some(&face_position) => boundary.push(face_position),
                None => return Err(Error::OutOfImage(format!("{face:?}"))),
            }
        }
        boundary.sort_unstable();
        columns.push(SparseColumn {
            dimension,
            boundary,
        });
        index[dimension].insert(filtered.cell, position);
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis() -> Vec<FilteredCell<u32>> {
        let mut cells = vec![
            FilteredCell::new(Cell::DoubleEdge(0, 1), 3.0),
            FilteredCell::new(Cell::Edge(1, 0), 0.0),
            FilteredCell::new(Cell::Node(0), 0.0),
            FilteredCell::new(Cell::Edge(0, 1), 0.0),
            FilteredCell::new(Cell::Node(1), 0.0),
        ];
        sort_basis(&mut cells);
        cells
    }

    #[test]
    fn test_sorted_boundaries_precede_parents() {
        let cells = basis();
        let columns = sparsify(&cells).unwrap();
        for (position, column) in columns.iter().enumerate() {
            for &face in &column.boundary {
                assert!(face < position);
            }
        }
    }

    #[test]
    fn test_dimension_breaks_time_ties() {
        let cells = basis();
        // Both nodes come before both edges, all at time 0
        assert_eq!(cells[0].dimension(), 0);
        assert_eq!(cells[1].dimension(), 0);
        assert_eq!(cells[2].dimension(), 1);
        assert_eq!(cells[3].dimension(), 1);
    }

    #[test]
    fn test_boundary_indices_sorted() {
        let columns = sparsify(&basis()).unwrap();
        for column in columns {
            assert!(column.boundary.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_missing_face_is_out_of_image() {
        // A double edge without its reverse edge in the basis
        let mut cells = vec![
            FilteredCell::new(Cell::Node(0), 0.0),
            FilteredCell::new(Cell::Node(1), 0.0),
            FilteredCell::new(Cell::Edge(0, 1), 0.0),
            FilteredCell::new(Cell::DoubleEdge(0, 1), 1.0),
        ];
        sort_basis(&mut cells);
        assert!(matches!(sparsify(&cells), Err(Error::OutOfImage(_))));
    }
}
