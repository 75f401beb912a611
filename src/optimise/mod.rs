//! Optimisation Decorators: Semantics-Preserving Pipeline Transforms
//!
//! Each decorator wraps an inner [`Pipeline`](crate::pipeline::Pipeline)
//! and returns the same barcode the inner pipeline would have produced on
//! the full graph, only cheaper:
//!
//! - [`CheckEmpty`]: a graph without edges has an empty barcode
//! - [`RemoveAppendages`]: nodes of total degree ≤ 1 cannot lie on a cycle
//! - [`ParallelOverComponents`]: weakly connected components share no
//!   cells, so their barcodes union
//! - [`ParallelOverWedges`]: path homology of a wedge decomposes as a
//!   direct sum at the cut vertex
//!
//! Compose cheap guards innermost and the parallel splits outermost; the
//! [`component_appendage_empty`], [`component_empty`] and
//! [`all_optimisations`] helpers build the standard stacks.

mod appendages;
mod check_empty;
mod components;
mod wedges;

pub use appendages::RemoveAppendages;
pub use check_empty::CheckEmpty;
pub use components::ParallelOverComponents;
pub use wedges::ParallelOverWedges;

/// Empty check, appendage trimming, then component fan-out
pub fn component_appendage_empty<P>(
    pipeline: P,
) -> ParallelOverComponents<RemoveAppendages<CheckEmpty<P>>> {
    ParallelOverComponents::new(RemoveAppendages::new(CheckEmpty::new(pipeline)))
}

/// Empty check, then component fan-out
pub fn component_empty<P>(pipeline: P) -> ParallelOverComponents<CheckEmpty<P>> {
    ParallelOverComponents::new(CheckEmpty::new(pipeline))
}

/// The full stack: empty check, wedge fan-out inside component fan-out
pub fn all_optimisations<P>(
    pipeline: P,
) -> ParallelOverComponents<ParallelOverWedges<CheckEmpty<P>>> {
    ParallelOverComponents::new(ParallelOverWedges::new(CheckEmpty::new(pipeline)))
}
