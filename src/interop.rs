//! Conversion to and from `petgraph`, for running the general graph
//! algorithms (isomorphism, traversal, ...) this crate does not provide.

use petgraph::EdgeType;
use petgraph::graph::{DiGraph, Graph as PetGraph, NodeIndex, UnGraph};

use crate::error::Result;
use crate::factory::{DenseGraph, new_graph};
use crate::graph::Graph;

/// Converts to a directed petgraph graph with the same node indices.
pub fn to_digraph<G: Graph>(g: &G) -> DiGraph<(), ()> {
    let mut graph = DiGraph::with_capacity(g.len(), g.edge_count());
    let nodes: Vec<NodeIndex> = (0..g.len()).map(|_| graph.add_node(())).collect();
    for (i, j) in g.edges() {
        graph.add_edge(nodes[i], nodes[j], ());
    }
    graph
}

/// Converts to an undirected petgraph graph, keeping one edge per pair
/// `i <= j` that is present in either direction.
pub fn to_ungraph<G: Graph>(g: &G) -> UnGraph<(), ()> {
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = (0..g.len()).map(|_| graph.add_node(())).collect();
    for (i, j) in g.edges() {
        if i <= j || !g.has(j, i) {
            graph.add_edge(nodes[i], nodes[j], ());
        }
    }
    graph
}

/// Builds a dense graph from a petgraph graph, node `k` becoming the node at
/// index `k`. Undirected edges are added in both directions and parallel
/// edges collapse into one.
pub fn from_petgraph<N, E, Ty: EdgeType>(graph: &PetGraph<N, E, Ty>) -> Result<DenseGraph> {
    let mut g = new_graph(graph.node_count())?;
    for e in graph.edge_indices() {
        if let Some((u, v)) = graph.edge_endpoints(e) {
            if Ty::is_directed() {
                g.add(u.index(), v.index());
            } else {
                g.add_undirected(u.index(), v.index());
            }
        }
    }
    Ok(g)
}
