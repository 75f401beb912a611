//! Pipelines: From Digraph to Barcode
//!
//! A pipeline is anything running a digraph to a persistence result; the
//! whole optimisation layer is decorators over this one contract:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Pipeline::run(&Digraph) -> PersistenceResult │
//! ├──────────────────────────────────────────────────────────────┤
//! │  HomologyPipeline     filtration → cells → sort → sparsify   │
//! │                       → solver → barcode                     │
//! │  CheckEmpty           short-circuit edgeless graphs          │
//! │  RemoveAppendages     trim acyclic fringe first              │
//! │  ParallelOverComponents / ParallelOverWedges                 │
//! │                       decompose, fan out, merge              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Grounded pipelines
//!
//! Grounded pipelines take dimensions 0 and 1 from the *grounded*
//! filtration (all of the base graph at time 0) but dimension 2 from the
//! *ungrounded* one: a two-cell's validity depends on constituent edges
//! that may lie outside the base graph, and grounding would distort the
//! times at which those become available.
//!
//! The solver is injected at construction; there is no default backend
//! singleton.

use crate::basis::{sort_basis, sparsify};
use crate::error::Result;
use crate::filtration::{cone_time, Filtration, ShortestPathFiltration, Truncated};
use crate::graph::{Digraph, NodeId};
use crate::homology::{
    DirectedFlagHomology, Homology, OrderedTuplesHomology, RegularPathHomology,
};
use crate::optimise::{all_optimisations, component_appendage_empty, component_empty};
use crate::result::PersistenceResult;
use crate::solver::Solver;
use tracing::debug;

/// The single contract every pipeline stage implements
pub trait Pipeline<V: NodeId>: Sync {
    fn run(&self, graph: &Digraph<V>) -> Result<PersistenceResult<V>>;
}

/// Core pipeline: filtration construction, cell generation, solve,
/// barcode assembly
pub struct HomologyPipeline<B, H, S> {
    filtration: B,
    homology: H,
    solver: S,
    grounded: bool,
    cone_truncation: bool,
}

impl<B, H, S> HomologyPipeline<B, H, S> {
    /// One ungrounded filtration for all dimensions
    pub fn standard(filtration: B, homology: H, solver: S) -> Self {
        Self {
            filtration,
            homology,
            solver,
            grounded: false,
            cone_truncation: false,
        }
    }

    /// Ground the filtration over the input graph for dimensions 0 and 1
    pub fn grounded(filtration: B, homology: H, solver: S) -> Self {
        Self {
            filtration,
            homology,
            solver,
            grounded: true,
            cone_truncation: false,
        }
    }

    /// Truncate the filtration at its cone time before generating cells
    ///
    /// Beyond the cone time dimension-1 features cannot change, so the
    /// basis shrinks without altering the barcode. Grounded pipelines
    /// extend the horizon to the latest entrance time of a base edge.
    pub fn with_cone_truncation(mut self) -> Self {
        self.cone_truncation = true;
        self
    }

    fn finish<V, F>(&self, graph: &Digraph<V>, filtration: F) -> Result<PersistenceResult<V>>
    where
        V: NodeId,
        F: Filtration<V>,
        H: Homology,
        S: Solver,
    {
        let mut cells = if self.grounded {
            let grounded = filtration.clone().ground(graph)?;
            let mut cells = self.homology.cells(&[0, 1], &grounded)?;
            cells.extend(self.homology.cells(&[2], &filtration)?);
            cells
        } else {
            self.homology.cells(&[0, 1, 2], &filtration)?
        };
        debug!(cells = cells.len(), "generated cell basis");

        sort_basis(&mut cells);
        let columns = sparsify(&cells)?;
        debug!(columns = columns.len(), "sparsified boundary matrix");

        let output = self.solver.compute_ph(&columns)?;
        debug!(
            paired = output.paired.len(),
            unpaired = output.unpaired.len(),
            "solver finished"
        );

        let mut result = PersistenceResult::empty();
        result.add_paired(&output.paired, &cells, output.paired_reps.as_deref());
        result.add_unpaired(&output.unpaired, &cells, output.unpaired_reps.as_deref());
        Ok(result)
    }
}

impl<V, F, B, H, S> Pipeline<V> for HomologyPipeline<B, H, S>
where
    V: NodeId,
    F: Filtration<V>,
    B: Fn(&Digraph<V>) -> F + Sync,
    H: Homology + Sync,
    S: Solver + Sync,
{
    fn run(&self, graph: &Digraph<V>) -> Result<PersistenceResult<V>> {
        let filtration = (self.filtration)(graph);

        if self.cone_truncation {
            let mut horizon = cone_time(&filtration);
            if self.grounded {
                horizon = horizon.max(latest_base_edge_time(&filtration, graph));
            }
            if horizon.is_finite() {
                debug!(horizon, "truncating filtration at cone time");
                return self.finish(graph, Truncated::new(filtration, horizon));
            }
        }

        self.finish(graph, filtration)
    }
}

/// Latest entrance time of an edge of the base graph
fn latest_base_edge_time<V: NodeId, F: Filtration<V>>(
    filtration: &F,
    graph: &Digraph<V>,
) -> f64 {
    graph
        .all_edges()
        .map(|(source, target, _)| filtration.edge_time(source, target))
        .fold(0.0, f64::max)
}

/// Grounded regular path homology with the default optimisations
/// (empty check, appendage trimming, component splitting)
pub fn grounded_path_homology<V: NodeId, S>(solver: S) -> impl Pipeline<V>
where
    S: Solver + Sync,
{
    component_appendage_empty(HomologyPipeline::grounded(
        |graph: &Digraph<V>| ShortestPathFiltration::new(graph),
        RegularPathHomology,
        solver,
    ))
}

/// Grounded regular path homology, additionally splitting at wedge points
pub fn grounded_path_homology_wedged<V: NodeId, S>(solver: S) -> impl Pipeline<V>
where
    S: Solver + Sync,
{
    all_optimisations(HomologyPipeline::grounded(
        |graph: &Digraph<V>| ShortestPathFiltration::new(graph),
        RegularPathHomology,
        solver,
    ))
}

/// Grounded directed flag homology with empty check and component
/// splitting
pub fn grounded_directed_flag<V: NodeId, S>(solver: S) -> impl Pipeline<V>
where
    S: Solver + Sync,
{
    component_empty(HomologyPipeline::grounded(
        |graph: &Digraph<V>| ShortestPathFiltration::new(graph),
        DirectedFlagHomology,
        solver,
    ))
}

/// Grounded ordered-tuple homology with empty check and component
/// splitting
pub fn grounded_ordered_tuples<V: NodeId, S>(solver: S) -> impl Pipeline<V>
where
    S: Solver + Sync,
{
    component_empty(HomologyPipeline::grounded(
        |graph: &Digraph<V>| ShortestPathFiltration::new(graph),
        OrderedTuplesHomology,
        solver,
    ))
}

/// Ungrounded regular path homology with the default optimisations
pub fn standard_path_homology<V: NodeId, S>(solver: S) -> impl Pipeline<V>
where
    S: Solver + Sync,
{
    component_appendage_empty(HomologyPipeline::standard(
        |graph: &Digraph<V>| ShortestPathFiltration::new(graph),
        RegularPathHomology,
        solver,
    ))
}

/// Ungrounded directed flag homology with empty check and component
/// splitting
pub fn standard_directed_flag<V: NodeId, S>(solver: S) -> impl Pipeline<V>
where
    S: Solver + Sync,
{
    component_empty(HomologyPipeline::standard(
        |graph: &Digraph<V>| ShortestPathFiltration::new(graph),
        DirectedFlagHomology,
        solver,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StandardReduction;

    fn mutual_edge(weight: f64) -> Digraph<u32> {
        let mut g = Digraph::new();
        g.add_edge(0, 1, weight);
        g.add_edge(1, 0, weight);
        g
    }

    fn deaths<V: NodeId>(result: &PersistenceResult<V>) -> Vec<f64> {
        let mut deaths: Vec<f64> = result.barcode.iter().map(|bar| bar.death).collect();
        deaths.sort_by(f64::total_cmp);
        deaths
    }

    #[test]
    fn test_unoptimised_grounded_pipeline() {
        let pipeline = HomologyPipeline::grounded(
            |graph: &Digraph<u32>| ShortestPathFiltration::new(graph),
            RegularPathHomology,
            StandardReduction::new(),
        );
        let result = pipeline.run(&mutual_edge(3.0)).unwrap();
        assert_eq!(result.barcode.len(), 1);
        assert_eq!(result.barcode[0].birth, 0.0);
        assert_eq!(result.barcode[0].death, 3.0);
    }

    #[test]
    fn test_grounded_births_are_zero() {
        let mut g = Digraph::new();
        for (a, b, w) in [(0u32, 1, 1.0), (1, 2, 2.0), (2, 0, 1.0), (1, 0, 3.0)] {
            g.add_edge(a, b, w);
        }
        let pipeline = grounded_path_homology(StandardReduction::new());
        let result = pipeline.run(&g).unwrap();
        assert!(result.barcode.iter().all(|bar| bar.birth == 0.0));
    }

    #[test]
    fn test_cone_truncation_preserves_barcode() {
        let mut g = Digraph::new();
        for i in 0..6u32 {
            g.add_edge(i, (i + 1) % 6, 1.0);
        }
        g.add_edge(0, 3, 1.0);

        let plain = HomologyPipeline::grounded(
            |graph: &Digraph<u32>| ShortestPathFiltration::new(graph),
            RegularPathHomology,
            StandardReduction::new(),
        );
        let truncated = HomologyPipeline::grounded(
            |graph: &Digraph<u32>| ShortestPathFiltration::new(graph),
            RegularPathHomology,
            StandardReduction::new(),
        )
        .with_cone_truncation();

        assert_eq!(
            deaths(&plain.run(&g).unwrap()),
            deaths(&truncated.run(&g).unwrap())
        );
    }

    #[test]
    fn test_representatives_are_edge_cycles() {
        let pipeline = HomologyPipeline::grounded(
            |graph: &Digraph<u32>| ShortestPathFiltration::new(graph),
            RegularPathHomology,
            StandardReduction::with_representatives(),
        );
        let result = pipeline.run(&mutual_edge(2.0)).unwrap();
        assert_eq!(result.reps.len(), 1);
        let rep = result.reps[0].as_ref().unwrap();
        assert!(rep
            .iter()
            .all(|cell| matches!(cell, crate::cell::Cell::Edge(_, _))));
        assert_eq!(rep.len(), 2);
    }
}
