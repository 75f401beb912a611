//! Solver Boundary: Sparse Matrix Reduction as a Collaborator
//!
//! The pipeline hands the solver a boundary matrix as sparse columns,
//! pre-sorted by (entrance time, dimension), and gets back persistence
//! pairs and unpaired column indices, optionally with representative
//! cycles. The solver trusts the ordering; it never re-sorts.
//!
//! [`StandardReduction`] is the built-in backend. Alternative backends are
//! injected by implementing [`Solver`]; [`by_name`] resolves the compiled
//! ones and reports
//! [`Error::MissingOptionalBackend`](crate::error::Error::MissingOptionalBackend)
//! for the rest.

mod reduction;

pub use reduction::StandardReduction;

use crate::basis::SparseColumn;
use crate::error::{Error, Result};

/// Persistence pairing of a reduced boundary matrix
#[derive(Debug, Clone, Default)]
pub struct SolverOutput {
    /// (birth index, death index) pairs
    pub paired: Vec<(usize, usize)>,
    /// Indices of columns that neither die nor kill
    pub unpaired: Vec<usize>,
    /// Representative cycle per pair, parallel to `paired`
    pub paired_reps: Option<Vec<Vec<usize>>>,
    /// Representative cycle per unpaired column, parallel to `unpaired`
    pub unpaired_reps: Option<Vec<Vec<usize>>>,
}

/// A persistence solver over GF(2) sparse boundary columns
pub trait Solver {
    /// Reduce `columns` and return the pairing
    ///
    /// Columns arrive sorted by (entrance time, dimension); every boundary
    /// index refers to an earlier column.
    fn compute_ph(&self, columns: &[SparseColumn]) -> Result<SolverOutput>;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn compute_ph(&self, columns: &[SparseColumn]) -> Result<SolverOutput> {
        (**self).compute_ph(columns)
    }
}

/// Resolve a solver backend by name
///
/// `"standard"` is always compiled in; any other name reports
/// [`Error::MissingOptionalBackend`].
pub fn by_name(name: &str) -> Result<StandardReduction> {
    match name {
        "standard" => Ok(StandardReduction::new()),
        other => Err(Error::MissingOptionalBackend(other.to_string())),
    }
}
