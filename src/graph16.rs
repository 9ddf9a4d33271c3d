//! Graphs of up to 16 nodes stored as one `u16` per row.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, check_node, swap_bits};

/// Directed graph with at most 16 nodes. Bit `j` of row `i` holds the edge
/// `i -> j`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RowArrayGraph {
    rows: Vec<u16>,
}

impl RowArrayGraph {
    pub const CAPACITY: usize = 16;

    /// Constructs an edgeless graph with a given number of nodes.
    pub fn new(rank: usize) -> Result<Self> {
        if rank > Self::CAPACITY {
            return Err(GraphError::RankOutOfRange {
                rank,
                capacity: Self::CAPACITY,
            });
        }
        Ok(Self { rows: vec![0; rank] })
    }

    /// Constructs a graph from one bitmask per row. The rank is the number of
    /// rows, and no row may point past it.
    pub fn from_rows(rows: Vec<u16>) -> Result<Self> {
        let rank = rows.len();
        if rank > Self::CAPACITY {
            return Err(GraphError::RankOutOfRange {
                rank,
                capacity: Self::CAPACITY,
            });
        }
        if rank < Self::CAPACITY {
            if let Some(row) = rows.iter().find(|&&row| row >> rank != 0) {
                return Err(GraphError::InvalidArgument(format!(
                    "row {row:#06b} points past a graph of rank {rank}"
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[u16] {
        &self.rows
    }

    #[track_caller]
    fn check(&self, i: usize, j: usize) {
        check_node(i, self.rows.len());
        check_node(j, self.rows.len());
    }
}

impl Graph for RowArrayGraph {
    fn add(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.rows[i] |= 1u16 << j;
    }

    fn add_undirected(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.rows[i] |= 1u16 << j;
        self.rows[j] |= 1u16 << i;
    }

    fn clear(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.rows[i] &= !(1u16 << j);
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.rows.swap(i, j);
        for row in &mut self.rows {
            *row = swap_bits(*row, i, j);
        }
    }

    fn has(&self, i: usize, j: usize) -> bool {
        self.check(i, j);
        self.rows[i] & (1u16 << j) != 0
    }

    fn reverse(&self) -> Self {
        let mut h = vec![0u16; self.rows.len()];
        for (i, &row) in self.rows.iter().enumerate() {
            let mut row = row;
            while row != 0 {
                let j = row.trailing_zeros() as usize;
                h[j] |= 1u16 << i;
                row &= row - 1;
            }
        }
        Self { rows: h }
    }

    fn out_degree(&self, i: usize) -> usize {
        check_node(i, self.rows.len());
        self.rows[i].count_ones() as usize
    }

    fn in_degree(&self, i: usize) -> usize {
        check_node(i, self.rows.len());
        self.rows.iter().map(|row| ((row >> i) & 1) as usize).sum()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for RowArrayGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_list(self))
    }
}
