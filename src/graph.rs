use std::fmt;

use itertools::iproduct;

use crate::error::GraphError;

/// A directed graph over nodes `0..len()` with at most one edge per ordered
/// pair. Self-loops are allowed.
///
/// Every node argument must be below `len()`. Passing anything else panics
/// with a [`GraphError::NodeOutOfRange`] message; indices are never wrapped
/// or clamped into range.
pub trait Graph: Clone + fmt::Display {
    /// Adds a directed edge from node `i` to `j`.
    fn add(&mut self, i: usize, j: usize);

    /// Adds an undirected edge between nodes `i` and `j`.
    fn add_undirected(&mut self, i: usize, j: usize) {
        self.add(i, j);
        self.add(j, i);
    }

    /// Removes the directed edge from node `i` to `j`.
    fn clear(&mut self, i: usize, j: usize);

    /// Isomorphically swaps nodes `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns whether an edge connects node `i` to `j`.
    fn has(&self, i: usize, j: usize) -> bool;

    /// Creates a graph with every edge reversed.
    fn reverse(&self) -> Self;

    /// Number of edges directed from node `i`.
    fn out_degree(&self, i: usize) -> usize;

    /// Number of edges directed to node `i`.
    fn in_degree(&self, i: usize) -> usize;

    /// Number of nodes in the graph.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All edges in row-major order.
    fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.len();
        iproduct!(0..n, 0..n)
            .filter(|&(i, j)| self.has(i, j))
            .collect()
    }

    fn edge_count(&self) -> usize {
        (0..self.len()).map(|i| self.out_degree(i)).sum()
    }

    /// Single-line edge list, e.g. `[(0 1) (1 1)]`.
    fn to_text(&self) -> String {
        crate::format::format_list(self)
    }
}

/// Panics unless `node < rank`.
#[track_caller]
pub(crate) fn check_node(node: usize, rank: usize) {
    if node >= rank {
        panic!("{}", GraphError::NodeOutOfRange { node, rank });
    }
}

/// Swaps bits `i` and `j` of `x`.
/// <http://graphics.stanford.edu/~seander/bithacks.html#SwappingBitsXOR>
#[inline]
pub(crate) fn swap_bits<T>(x: T, i: usize, j: usize) -> T
where
    T: Copy
        + std::ops::Shr<usize, Output = T>
        + std::ops::Shl<usize, Output = T>
        + std::ops::BitXor<Output = T>
        + std::ops::BitAnd<Output = T>
        + std::ops::BitOr<Output = T>
        + From<u8>,
{
    let d = ((x >> i) ^ (x >> j)) & T::from(1);
    x ^ ((d << i) | (d << j))
}
