//! Parallel Decomposition over Weakly Connected Components
//!
//! Cells never span two weak components, so the barcode of a disjoint
//! union is the multiset union of the component barcodes. Each component
//! runs as an independent task over its own induced subgraph; a failure in
//! any task aborts the whole computation.

use crate::error::Result;
use crate::graph::{induced_subgraph, weak_components, Digraph, NodeId};
use crate::pipeline::Pipeline;
use crate::result::PersistenceResult;
use rayon::prelude::*;
use tracing::debug;

/// Fan out one task per weakly connected component and merge
pub struct ParallelOverComponents<P> {
    inner: P,
}

impl<P> ParallelOverComponents<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<V: NodeId, P: Pipeline<V>> Pipeline<V> for ParallelOverComponents<P> {
    fn run(&self, graph: &Digraph<V>) -> Result<PersistenceResult<V>> {
        let components = weak_components(graph);
        match components.len() {
            0 => Ok(PersistenceResult::empty()),
            1 => self.inner.run(graph),
            count => {
                debug!(components = count, "splitting over weak components");
                let results: Vec<PersistenceResult<V>> = components
                    .into_par_iter()
                    .map(|component| self.inner.run(&induced_subgraph(graph, &component)))
                    .collect::<Result<_>>()?;
                Ok(PersistenceResult::merge(results))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::grounded_path_homology;
    use crate::solver::StandardReduction;

    #[test]
    fn test_disjoint_union_merges() {
        // Two mutual-edge pairs with different weights
        let mut g = Digraph::new();
        g.add_edge(0u32, 1, 1.0);
        g.add_edge(1, 0, 1.0);
        g.add_edge(10, 11, 4.0);
        g.add_edge(11, 10, 4.0);

        let pipeline = grounded_path_homology(StandardReduction::new());
        let result = pipeline.run(&g).unwrap();

        let mut deaths: Vec<f64> = result.barcode.iter().map(|b| b.death).collect();
        deaths.sort_by(f64::total_cmp);
        assert_eq!(deaths, vec![1.0, 4.0]);
    }
}
