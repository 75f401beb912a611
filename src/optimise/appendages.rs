//! Appendage Removal

use crate::error::Result;
use crate::graph::{without_appendages, Digraph, NodeId};
use crate::pipeline::Pipeline;
use crate::result::PersistenceResult;
use tracing::debug;

/// Trim dangling nodes to a fixpoint before delegating
///
/// Nodes of total degree ≤ 1 cannot participate in any cycle, so the
/// trimmed graph carries the same dimension-1 barcode.
pub struct RemoveAppendages<P> {
    inner: P,
}

impl<P> RemoveAppendages<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<V: NodeId, P: Pipeline<V>> Pipeline<V> for RemoveAppendages<P> {
    fn run(&self, graph: &Digraph<V>) -> Result<PersistenceResult<V>> {
        let trimmed = without_appendages(graph);
        if trimmed.node_count() < graph.node_count() {
            debug!(
                removed = graph.node_count() - trimmed.node_count(),
                "trimmed appendage nodes"
            );
        }
        self.inner.run(&trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtration::ShortestPathFiltration;
    use crate::homology::RegularPathHomology;
    use crate::pipeline::HomologyPipeline;
    use crate::solver::StandardReduction;

    #[test]
    fn test_pendant_does_not_change_barcode() {
        // Double edge with a pendant
        let mut g = Digraph::new();
        g.add_edge(0u32, 1, 1.0);
        g.add_edge(1, 0, 1.0);
        g.add_edge(0, 2, 1.0);

        let base = HomologyPipeline::grounded(
            |graph: &Digraph<u32>| ShortestPathFiltration::new(graph),
            RegularPathHomology,
            StandardReduction::new(),
        );
        let plain = base.run(&g).unwrap();

        let trimming = RemoveAppendages::new(HomologyPipeline::grounded(
            |graph: &Digraph<u32>| ShortestPathFiltration::new(graph),
            RegularPathHomology,
            StandardReduction::new(),
        ));
        let trimmed = trimming.run(&g).unwrap();

        assert_eq!(plain.barcode.len(), trimmed.barcode.len());
        assert_eq!(plain.barcode[0].death, trimmed.barcode[0].death);
    }
}
