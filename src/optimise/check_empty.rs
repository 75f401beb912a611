//! Empty-Graph Short Circuit

use crate::error::Result;
use crate::graph::{Digraph, NodeId};
use crate::pipeline::Pipeline;
use crate::result::PersistenceResult;

/// Skip the solver entirely when the graph has no edges
pub struct CheckEmpty<P> {
    inner: P,
}

impl<P> CheckEmpty<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<V: NodeId, P: Pipeline<V>> Pipeline<V> for CheckEmpty<P> {
    fn run(&self, graph: &Digraph<V>) -> Result<PersistenceResult<V>> {
        if graph.edge_count() == 0 {
            return Ok(PersistenceResult::empty());
        }
        self.inner.run(graph)
    }
}
