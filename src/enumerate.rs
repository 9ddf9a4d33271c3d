//! Exhaustive enumeration of every graph reachable by adding a subset of the
//! candidate edges to a seed graph.
//!
//! The output is built by doubling: starting from `[seed]`, each candidate
//! edge in row-major order appends a copy of every graph produced so far with
//! that edge added. The k-th graph therefore contains exactly the candidate
//! edges whose positions are set in the binary expansion of k, and the seed
//! always comes first.

use itertools::Itertools;
use tracing::{debug, trace};

use crate::graph::Graph;

/// Which edges count as candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Every ordered pair `(i, j)`, self-loops included.
    Directed,
    /// Every pair `(i, j)` with `i <= j`, added in both directions.
    Undirected,
}

/// Candidate edges of a rank `rank` graph in enumeration order.
pub fn candidate_edges(rank: usize, orientation: Orientation) -> Vec<(usize, usize)> {
    match orientation {
        Orientation::Directed => (0..rank).cartesian_product(0..rank).collect(),
        Orientation::Undirected => (0..rank).flat_map(|i| (i..rank).map(move |j| (i, j))).collect(),
    }
}

/// Number of graphs an enumeration of rank `rank` produces, or `None` if it
/// does not fit in a `usize`.
pub fn expected_count(rank: usize, orientation: Orientation) -> Option<usize> {
    let edges = match orientation {
        Orientation::Directed => rank.checked_mul(rank)?,
        Orientation::Undirected => rank.checked_mul(rank.checked_add(1)?)? / 2,
    };
    1usize.checked_shl(u32::try_from(edges).ok()?)
}

/// Appends a copy of each of the current graphs with edge `(i, j)` added.
fn extend_with_edge<G: Graph>(
    graphs: &mut Vec<G>,
    (i, j): (usize, usize),
    orientation: Orientation,
) {
    let l = graphs.len();
    graphs.reserve(l);
    for k in 0..l {
        let mut g = graphs[k].clone();
        match orientation {
            Orientation::Directed => g.add(i, j),
            Orientation::Undirected => g.add_undirected(i, j),
        }
        graphs.push(g);
    }
}

/// Enumerates every graph reachable from `seed`, calling `progress` after
/// each candidate edge with the number of graphs built so far.
pub fn enumerate_with<G, F>(seed: G, orientation: Orientation, mut progress: F) -> Vec<G>
where
    G: Graph,
    F: FnMut(usize),
{
    let rank = seed.len();
    let candidates = candidate_edges(rank, orientation);
    debug!(rank, ?orientation, candidates = candidates.len(), "enumerating graphs");

    let mut graphs = vec![seed];
    for edge in candidates {
        extend_with_edge(&mut graphs, edge, orientation);
        trace!(?edge, graphs = graphs.len(), "added candidate edge");
        progress(graphs.len());
    }

    debug!(rank, graphs = graphs.len(), "enumeration finished");
    graphs
}

/// Generates all directed graphs of the seed's rank, starting with the
/// given empty graph.
pub fn generate<G: Graph>(seed: G) -> Vec<G> {
    enumerate_with(seed, Orientation::Directed, |_| {})
}

/// Generates all undirected graphs of the seed's rank, starting with the
/// given empty graph.
pub fn generate_undirected<G: Graph>(seed: G) -> Vec<G> {
    enumerate_with(seed, Orientation::Undirected, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph16::RowArrayGraph;
    use crate::graph8::FixedWordGraph;

    #[test]
    fn candidate_order() {
        assert_eq!(
            candidate_edges(2, Orientation::Directed),
            [(0, 0), (0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(
            candidate_edges(3, Orientation::Undirected),
            [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]
        );
        assert!(candidate_edges(0, Orientation::Directed).is_empty());
    }

    #[test]
    fn counts() {
        assert_eq!(expected_count(0, Orientation::Directed), Some(1));
        assert_eq!(expected_count(2, Orientation::Directed), Some(16));
        assert_eq!(expected_count(2, Orientation::Undirected), Some(8));
        assert_eq!(expected_count(3, Orientation::Undirected), Some(64));
        assert_eq!(expected_count(8, Orientation::Directed), None);
        assert_eq!(expected_count(11, Orientation::Undirected), None);
    }

    #[test]
    fn rank_two() {
        let seed = FixedWordGraph::new(2).unwrap();
        assert_eq!(generate(seed).len(), 16);
        assert_eq!(generate_undirected(seed).len(), 8);
    }

    #[test]
    fn order_follows_the_binary_expansion() {
        let graphs = generate(RowArrayGraph::new(2).unwrap());
        let candidates = candidate_edges(2, Orientation::Directed);
        for (k, g) in graphs.iter().enumerate() {
            for (bit, &(i, j)) in candidates.iter().enumerate() {
                assert_eq!(g.has(i, j), k >> bit & 1 == 1, "graph {k} edge ({i} {j})");
            }
        }
    }

    #[test]
    fn undirected_graphs_are_symmetric() {
        for g in generate_undirected(FixedWordGraph::new(3).unwrap()) {
            assert_eq!(g, g.reverse());
        }
    }

    #[test]
    fn progress_reports_each_doubling() {
        let mut seen = Vec::new();
        enumerate_with(FixedWordGraph::new(2).unwrap(), Orientation::Undirected, |n| seen.push(n));
        assert_eq!(seen, [2, 4, 8]);
    }
}
