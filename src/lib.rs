//! # path-homology
//!
//! Persistent grounded path homology barcodes of finite weighted digraphs.
//!
//! ## Theoretical Framework
//!
//! Path homology (Grigor'yan, Lin, Muranov, Yau) is a homology theory
//! built from directed paths rather than simplices, making it sensitive to
//! the asymmetry of a network. The grounded variant (Chaplin, Harrington,
//! Tillmann) fixes a base graph G, lets a shortest-path filtration grow
//! around it and measures how the cycles of G are progressively filled in.
//! The output is a barcode: a multiset of [birth, death) intervals, one
//! per persistent one-dimensional feature.
//!
//! ## Pipeline
//!
//! ```text
//! Digraph ──filtration──► entrance times (shortest paths, grounding,
//!                         truncation)
//!         ──homology────► cell basis (nodes, edges, double edges,
//!                         directed triangles, long squares)
//!         ──basis───────► sort by (time, dimension), sparsify to columns
//!         ──solver──────► persistence pairs + unpaired columns
//!         ──result──────► barcode, optional representative cycles
//! ```
//!
//! The decomposition decorators in [`optimise`] split the input at weak
//! components and wedge points, run the pieces in parallel and merge, and
//! the cone-time truncation discards the part of the filtration that can
//! no longer affect dimension-1 features.
//!
//! ## Example
//!
//! ```
//! use path_homology::{grounded_path_homology, Digraph, Pipeline, StandardReduction};
//!
//! let mut g = Digraph::new();
//! g.add_edge(0u32, 1, 3.0);
//! g.add_edge(1, 0, 3.0);
//!
//! let pipeline = grounded_path_homology(StandardReduction::new());
//! let result = pipeline.run(&g).unwrap();
//! assert_eq!(result.barcode.len(), 1);
//! assert_eq!(result.barcode[0].death, 3.0);
//! ```
//!
//! ## References
//!
//! - Grigor'yan, Lin, Muranov, Yau, "Homologies of path complexes and
//!   digraphs" (2013)
//! - Chaplin, "First Betti number of the path homology of random directed
//!   graphs" (2022)
//! - Chaplin, Harrington, Tillmann, "Grounded persistent path homology"
//!   (2023)

pub mod basis;
pub mod cell;
pub mod error;
pub mod filtration;
pub mod graph;
pub mod homology;
pub mod optimise;
pub mod pipeline;
pub mod result;
pub mod solver;

// Re-exports from graph
pub use graph::{Digraph, NodeId, Weight};

// Re-exports from error
pub use error::{Error, Result};

// Re-exports from filtration
pub use filtration::{cone_time, Filtration, Grounded, ShortestPathFiltration, Truncated};

// Re-exports from cell
pub use cell::{Cell, FilteredCell};

// Re-exports from homology
pub use homology::{
    DirectedFlagHomology, Homology, OrderedTuplesHomology, RegularPathHomology,
};

// Re-exports from basis
pub use basis::{sort_basis, sparsify, SparseColumn};

// Re-exports from solver
pub use solver::{Solver, SolverOutput, StandardReduction};

// Re-exports from result
pub use result::{Bar, PersistenceResult};

// Re-exports from pipeline
pub use pipeline::{
    grounded_directed_flag, grounded_ordered_tuples, grounded_path_homology,
    grounded_path_homology_wedged, standard_directed_flag, standard_path_homology,
    HomologyPipeline, Pipeline,
};

// Re-exports from optimise
pub use optimise::{
    all_optimisations, component_appendage_empty, component_empty, CheckEmpty,
    ParallelOverComponents, ParallelOverWedges, RemoveAppendages,
};
