//! Parallel Decomposition over Wedge Components
//!
//! Path homology of a wedge of graphs splits as a direct sum over the cut
//! vertex, so each wedge component computes independently. The component
//! search itself is iterative (see
//! [`wedge_components`](crate::graph::wedge_components)); this decorator
//! only fans out the leaves and merges.

use crate::error::Result;
use crate::graph::{induced_subgraph, wedge_components, Digraph, NodeId};
use crate::pipeline::Pipeline;
use crate::result::PersistenceResult;
use rayon::prelude::*;
use tracing::debug;

/// Fan out one task per wedge component and merge
pub struct ParallelOverWedges<P> {
    inner: P,
}

impl<P> ParallelOverWedges<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<V: NodeId, P: Pipeline<V>> Pipeline<V> for ParallelOverWedges<P> {
    fn run(&self, graph: &Digraph<V>) -> Result<PersistenceResult<V>> {
        let components = wedge_components(graph);
        match components.len() {
            0 => Ok(PersistenceResult::empty()),
            1 => self.inner.run(&induced_subgraph(graph, &components[0])),
            count => {
                debug!(wedges = count, "splitting at wedge points");
                let results: Vec<PersistenceResult<V>> = components
                    .into_par_iter()
                    .map(|component| self.inner.run(&induced_subgraph(graph, &component)))
                    .collect::<Result<_>>()?;
                Ok(PersistenceResult::merge(results))
            }
        }
    }
}
