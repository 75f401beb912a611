//! Error Types for Basis Construction and Pipeline Orchestration
//!
//! All errors here are synchronous, non-retryable programming or
//! configuration errors surfaced to the immediate caller. Numerical edge
//! cases (unreachable node pairs, zero-persistence pairs) are not errors:
//! unreachable pairs enter at +∞ and are excluded from the neighbour
//! distance maps, and zero-persistence pairs are silently dropped during
//! barcode assembly.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a filtration, generating a cell basis or
/// running a pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A cell basis was requested outside dimensions {0, 1, 2}
    #[error("cells are only generated in dimensions 0, 1 and 2 (requested {0})")]
    UnsupportedDimension(usize),

    /// An operation was applied to a value in the wrong state, e.g.
    /// grounding an already grounded filtration
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// A structural map failed to hit a required target cell: the boundary
    /// of a basis cell references a cell that was never indexed
    #[error("cell {0} is outside the image of the indexed basis")]
    OutOfImage(String),

    /// A solver backend was selected that is not compiled into this build
    #[error("solver backend `{0}` is not available")]
    MissingOptionalBackend(String),
}
