//! Digraph Input and Structural Graph Utilities
//!
//! The input to every pipeline is a finite directed graph with non-negative
//! edge weights, represented as a `petgraph` [`DiGraphMap`] keyed by the
//! caller's own node values. Node identifiers are arbitrary comparable,
//! hashable `Copy` values; see [`NodeId`].
//!
//! This module also holds the structural decompositions the optimisation
//! decorators rely on:
//!
//! - weakly connected components (disjoint-union decomposition)
//! - appendage trimming (nodes of total degree ≤ 1 cannot lie on a cycle)
//! - wedge components (cut-vertex decomposition; path homology of a wedge
//!   splits as a direct sum)

use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight type; weights must be non-negative
pub type Weight = f64;

/// The digraph collaborator consumed by every pipeline
pub type Digraph<V> = DiGraphMap<V, Weight>;

/// Requirements on node identifiers
///
/// Ordering gives deterministic iteration and tie-breaking; `Send + Sync`
/// lets the parallel decorators move induced subgraphs across tasks.
pub trait NodeId: Copy + Eq + Ord + Hash + Debug + Send + Sync {}

impl<T> NodeId for T where T: Copy + Eq + Ord + Hash + Debug + Send + Sync {}

/// Total degree of a node: incoming plus outgoing neighbours
fn degree<V: NodeId>(graph: &Digraph<V>, node: V) -> usize {
    graph.neighbors_directed(node, Direction::Outgoing).count()
        + graph.neighbors_directed(node, Direction::Incoming).count()
}

/// Subgraph induced by a node subset, with all edges between kept nodes
pub fn induced_subgraph<V: NodeId>(graph: &Digraph<V>, nodes: &BTreeSet<V>) -> Digraph<V> {
    let mut sub = Digraph::new();
    for &node in nodes {
        if graph.contains_node(node) {
            sub.add_node(node);
        }
    }
    for (source, target, &weight) in graph.all_edges() {
        if nodes.contains(&source) && nodes.contains(&target) {
            sub.add_edge(source, target, weight);
        }
    }
    sub
}

/// Weakly connected components, i.e. components of the underlying
/// undirected graph
pub fn weak_components<V: NodeId>(graph: &Digraph<V>) -> Vec<BTreeSet<V>> {
    let mut components = Vec::new();
    let mut seen: BTreeSet<V> = BTreeSet::new();
    let mut roots: Vec<V> = graph.nodes().collect();
    roots.sort();

    for root in roots {
        if seen.contains(&root) {
            continue;
        }
        let mut component = BTreeSet::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !component.insert(node) {
                continue;
            }
            seen.insert(node);
            stack.extend(graph.neighbors_directed(node, Direction::Outgoing));
            stack.extend(graph.neighbors_directed(node, Direction::Incoming));
        }
        components.push(component);
    }
    components
}

/// Iteratively strip nodes of total degree ≤ 1 until a fixpoint
///
/// Dangling nodes and pendant chains cannot participate in any cycle, so
/// removing them preserves the degree-one barcode.
pub fn without_appendages<V: NodeId>(graph: &Digraph<V>) -> Digraph<V> {
    let mut current = graph.clone();
    loop {
        let internal: BTreeSet<V> = current
            .nodes()
            .filter(|&node| degree(&current, node) > 1)
            .collect();
        if internal.len() == current.node_count() {
            return current;
        }
        current = induced_subgraph(&current, &internal);
    }
}

/// Cut-vertex (wedge) decomposition
///
/// Repeatedly trims appendages, then searches for a vertex whose removal
/// disconnects the trimmed subgraph into at least two weak components. Each
/// component, re-joined with the cut vertex, is processed again; a node set
/// with no cut vertex is a leaf. Node sets whose trimmed subgraph has no
/// edges are dropped since they carry no cycles.
///
/// Uses an explicit worklist rather than recursion; pathological graphs can
/// nest wedge points arbitrarily deep.
pub fn wedge_components<V: NodeId>(graph: &Digraph<V>) -> Vec<BTreeSet<V>> {
    let mut leaves = Vec::new();
    let mut worklist: Vec<BTreeSet<V>> = vec![graph.nodes().collect()];

    'outer: while let Some(node_set) = worklist.pop() {
        let sub = without_appendages(&induced_subgraph(graph, &node_set));
        if sub.edge_count() == 0 {
            continue;
        }
        let sub_nodes: BTreeSet<V> = sub.nodes().collect();
        for &candidate in &sub_nodes {
            let mut rest = sub_nodes.clone();
            rest.remove(&candidate);
            let removed = induced_subgraph(&sub, &rest);
            // A null remainder (e.g. removing one end of a double edge) is
            // not a wedge
            if removed.edge_count() == 0 {
                continue;
            }
            let pieces = weak_components(&removed);
            if pieces.len() > 1 {
                for mut piece in pieces {
                    piece.insert(candidate);
                    worklist.push(piece);
                }
                continue 'outer;
            }
        }
        leaves.push(node_set);
    }
    leaves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Digraph<usize> {
        let mut g = Digraph::new();
        for i in 0..n {
            g.add_edge(i, (i + 1) % n, 1.0);
        }
        g
    }

    #[test]
    fn test_weak_components_directed() {
        let mut g = Digraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(2, 1, 1.0);
        g.add_edge(3, 4, 1.0);
        g.add_node(5);

        let comps = weak_components(&g);
        // Edge direction is ignored: {0,1,2}, {3,4}, {5}
        assert_eq!(comps.len(), 3);
        assert!(comps.contains(&BTreeSet::from([0, 1, 2])));
        assert!(comps.contains(&BTreeSet::from([5])));
    }

    #[test]
    fn test_appendage_trimming_reaches_fixpoint() {
        // Triangle with a pendant chain 2 -> 3 -> 4
        let mut g = cycle(3);
        g.add_edge(2, 3, 1.0);
        g.add_edge(3, 4, 1.0);

        let trimmed = without_appendages(&g);
        // Removing 4 drops 3 to degree 1, so the whole chain goes
        assert_eq!(trimmed.node_count(), 3);
        assert_eq!(trimmed.edge_count(), 3);
    }

    #[test]
    fn test_appendages_keep_cycles() {
        let g = cycle(5);
        let trimmed = without_appendages(&g);
        assert_eq!(trimmed.node_count(), 5);
    }

    #[test]
    fn test_wedge_of_two_triangles() {
        // Two directed triangles sharing vertex 0
        let mut g = Digraph::new();
        for (a, b) in [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)] {
            g.add_edge(a, b, 1.0);
        }

        let comps = wedge_components(&g);
        assert_eq!(comps.len(), 2);
        for comp in &comps {
            assert!(comp.contains(&0));
            assert_eq!(comp.len(), 3);
        }
    }

    #[test]
    fn test_no_wedge_in_double_edge() {
        let mut g = Digraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 0, 1.0);

        let comps = wedge_components(&g);
        // Removing either node leaves a null graph, so nothing splits
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0], BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_wedge_drops_acyclic_sets() {
        // A path graph trims to nothing
        let mut g = Digraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);

        assert!(wedge_components(&g).is_empty());
    }
}
