use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::graph16::RowArrayGraph;
use crate::graph8::FixedWordGraph;
use crate::graphn::PackedBitsetGraph;

/// A graph in the narrowest representation that fits its rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DenseGraph {
    Word(FixedWordGraph),
    Rows(RowArrayGraph),
    Packed(PackedBitsetGraph),
}

/// Constructs an edgeless graph with `rank` nodes, choosing
/// [`FixedWordGraph`] up to 8 nodes, [`RowArrayGraph`] up to 16 and
/// [`PackedBitsetGraph`] beyond that.
pub fn new_graph(rank: usize) -> Result<DenseGraph> {
    let g = if rank <= FixedWordGraph::CAPACITY {
        DenseGraph::Word(FixedWordGraph::new(rank)?)
    } else if rank <= RowArrayGraph::CAPACITY {
        DenseGraph::Rows(RowArrayGraph::new(rank)?)
    } else {
        DenseGraph::Packed(PackedBitsetGraph::new(rank)?)
    };
    debug!(rank, representation = g.representation(), "new graph");
    Ok(g)
}

impl DenseGraph {
    /// Short name of the underlying representation.
    pub fn representation(&self) -> &'static str {
        match self {
            DenseGraph::Word(_) => "word",
            DenseGraph::Rows(_) => "rows",
            DenseGraph::Packed(_) => "packed",
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            DenseGraph::Word($g) => $body,
            DenseGraph::Rows($g) => $body,
            DenseGraph::Packed($g) => $body,
        }
    };
}

impl Graph for DenseGraph {
    fn add(&mut self, i: usize, j: usize) {
        dispatch!(self, g => g.add(i, j))
    }

    fn add_undirected(&mut self, i: usize, j: usize) {
        dispatch!(self, g => g.add_undirected(i, j))
    }

    fn clear(&mut self, i: usize, j: usize) {
        dispatch!(self, g => g.clear(i, j))
    }

    fn swap(&mut self, i: usize, j: usize) {
        dispatch!(self, g => g.swap(i, j))
    }

    fn has(&self, i: usize, j: usize) -> bool {
        dispatch!(self, g => g.has(i, j))
    }

    fn reverse(&self) -> Self {
        match self {
            DenseGraph::Word(g) => DenseGraph::Word(g.reverse()),
            DenseGraph::Rows(g) => DenseGraph::Rows(g.reverse()),
            DenseGraph::Packed(g) => DenseGraph::Packed(g.reverse()),
        }
    }

    fn out_degree(&self, i: usize) -> usize {
        dispatch!(self, g => g.out_degree(i))
    }

    fn in_degree(&self, i: usize) -> usize {
        dispatch!(self, g => g.in_degree(i))
    }

    fn len(&self) -> usize {
        dispatch!(self, g => g.len())
    }

    fn edge_count(&self) -> usize {
        dispatch!(self, g => g.edge_count())
    }
}

impl fmt::Display for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, g => fmt::Display::fmt(g, f))
    }
}

impl From<FixedWordGraph> for DenseGraph {
    fn from(g: FixedWordGraph) -> Self {
        DenseGraph::Word(g)
    }
}

impl From<RowArrayGraph> for DenseGraph {
    fn from(g: RowArrayGraph) -> Self {
        DenseGraph::Rows(g)
    }
}

impl From<PackedBitsetGraph> for DenseGraph {
    fn from(g: PackedBitsetGraph) -> Self {
        DenseGraph::Packed(g)
    }
}
