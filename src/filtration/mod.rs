//! Filtrations: Entrance Times over a Digraph
//!
//! A filtration assigns every node and every ordered node pair of a digraph
//! an entrance time in ℝ≥0 ∪ {+∞}. Cells of the chain complex inherit their
//! times from here, so the whole persistence computation is parameterised by
//! the choice of filtration.
//!
//! ## Decorator composition
//!
//! The concrete filtrations form a small tower of typed decorators:
//!
//! ```text
//! ShortestPathFiltration        entrance time = shortest-path distance
//!   └─ Grounded<F>              base graph forced to time 0
//!   └─ Truncated<F>             times above a threshold clamped to +∞
//! ```
//!
//! `Truncated<F>::ground` truncates the underlying filtration first and
//! re-grounds afterwards, so the two decorators commute the way grounded
//! truncation requires. Grounding twice is a caller error and reports
//! [`Error::InvalidOperation`](crate::error::Error::InvalidOperation).

mod cone;
mod grounded;
mod shortest_path;
mod truncated;

pub use cone::cone_time;
pub use grounded::Grounded;
pub use shortest_path::ShortestPathFiltration;
pub use truncated::Truncated;

use crate::error::Result;
use crate::graph::{Digraph, NodeId};
use std::collections::HashMap;

/// Entrance-time function over the nodes and ordered node pairs of a
/// digraph
///
/// `Clone` is required because grounded pipelines evaluate the same
/// filtration both grounded (dimensions 0 and 1) and ungrounded
/// (dimension 2).
pub trait Filtration<V: NodeId>: Clone {
    /// Result of grounding this filtration over a base graph
    type Grounded: Filtration<V>;

    /// Time at which a node enters
    fn node_time(&self, node: V) -> f64;

    /// Time at which the ordered pair (source, target) becomes connected;
    /// +∞ if it never does
    fn edge_time(&self, source: V, target: V) -> f64;

    /// All nodes with their entrance times, deterministically ordered
    fn node_times(&self) -> Vec<(V, f64)>;

    /// All ordered pairs with finite entrance times, deterministically
    /// ordered
    fn edge_times(&self) -> Vec<((V, V), f64)>;

    /// Nested source → target → time view for neighbourhood scans,
    /// excluding self-pairs and unreachable pairs
    fn distance_map(&self) -> HashMap<V, HashMap<V, f64>>;

    /// Decorate this filtration so every node and edge of `base` enters at
    /// time 0
    fn ground(self, base: &Digraph<V>) -> Result<Self::Grounded>;
}
