//! Graphs of up to 8 nodes packed into a single `u64`.
//!
//! Bit `i * 8 + j` holds the edge `i -> j`, so row `i` is the byte at offset
//! `i * 8` and column `j` is every eighth bit starting at `j`. All operations
//! run in constant time.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, check_node};

/// Lowest bit of every row.
const COLUMN: u64 = 0x0101_0101_0101_0101;

/// Directed graph with at most 8 nodes and operations in constant time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedWordGraph {
    g: u64,
    rank: u8,
}

impl FixedWordGraph {
    pub const CAPACITY: usize = 8;

    /// Constructs an edgeless graph with a given number of nodes.
    pub fn new(rank: usize) -> Result<Self> {
        if rank > Self::CAPACITY {
            return Err(GraphError::RankOutOfRange {
                rank,
                capacity: Self::CAPACITY,
            });
        }
        Ok(Self { g: 0, rank: rank as u8 })
    }

    /// Constructs a graph from its packed row-major word.
    ///
    /// Bits belonging to nodes at or above `rank` must be clear.
    pub fn from_bits(rank: usize, bits: u64) -> Result<Self> {
        let mut g = Self::new(rank)?;
        if bits & !g.mask() != 0 {
            return Err(GraphError::InvalidArgument(format!(
                "bits {bits:#x} set outside a graph of rank {rank}"
            )));
        }
        g.g = bits;
        Ok(g)
    }

    /// The packed row-major word.
    pub fn bits(&self) -> u64 {
        self.g
    }

    /// Bits that may be set for the current rank.
    fn mask(&self) -> u64 {
        let r = self.rank as u32;
        let row = (1u64 << r) - 1;
        if r == 8 {
            u64::MAX
        } else {
            // `row` repeated over the first `r` rows.
            row.wrapping_mul(COLUMN) & ((1u64 << (r * 8)) - 1)
        }
    }

    #[track_caller]
    fn check(&self, i: usize, j: usize) {
        check_node(i, self.rank as usize);
        check_node(j, self.rank as usize);
    }
}

impl Graph for FixedWordGraph {
    fn add(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.g |= 1u64 << (i * 8 + j);
    }

    fn add_undirected(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.g |= 1u64 << (i * 8 + j);
        self.g |= 1u64 << (i + j * 8);
    }

    fn clear(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.g &= !(1u64 << (i * 8 + j));
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.check(i, j);
        // Exchange rows i and j.
        let x = ((self.g >> (i * 8)) ^ (self.g >> (j * 8))) & 0xff;
        self.g ^= (x << (i * 8)) | (x << (j * 8));
        // Exchange columns i and j in every row at once.
        let x = ((self.g >> i) ^ (self.g >> j)) & COLUMN;
        self.g ^= (x << i) | (x << j);
    }

    fn has(&self, i: usize, j: usize) -> bool {
        self.check(i, j);
        self.g & (1u64 << (i * 8 + j)) != 0
    }

    fn reverse(&self) -> Self {
        // Transpose the 8x8 bit matrix by swapping 1x1, 2x2 then 4x4 blocks
        // across the diagonal.
        let mut x = self.g;
        let t = (x ^ (x >> 7)) & 0x00aa_00aa_00aa_00aa;
        x ^= t ^ (t << 7);
        let t = (x ^ (x >> 14)) & 0x0000_cccc_0000_cccc;
        x ^= t ^ (t << 14);
        let t = (x ^ (x >> 28)) & 0x0000_0000_f0f0_f0f0;
        x ^= t ^ (t << 28);
        Self { g: x, rank: self.rank }
    }

    fn out_degree(&self, i: usize) -> usize {
        check_node(i, self.rank as usize);
        ((self.g >> (i * 8)) as u8).count_ones() as usize
    }

    fn in_degree(&self, i: usize) -> usize {
        check_node(i, self.rank as usize);
        // Equivalent to ((g >> i) & COLUMN).count_ones()
        const M1: u64 = 0x00ff_00ff_00ff_00ff;
        const M2: u64 = 0x0000_ffff_0000_ffff;
        const M3: u64 = 0x0000_0000_ffff_ffff;
        let d = (self.g >> i) & COLUMN;
        let d = ((d >> 8) + d) & M1;
        let d = ((d >> 16) + d) & M2;
        let d = ((d >> 32) + d) & M3;
        d as usize
    }

    fn len(&self) -> usize {
        self.rank as usize
    }

    fn edge_count(&self) -> usize {
        self.g.count_ones() as usize
    }
}

impl fmt::Display for FixedWordGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_list(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(bits: u64) -> FixedWordGraph {
        FixedWordGraph::from_bits(3, bits).unwrap()
    }

    #[test]
    fn test_add() {
        let mut g = FixedWordGraph::new(3).unwrap();
        g.add(0, 0);
        g.add(0, 2);
        g.add(1, 0);
        g.add(1, 1);
        g.add(2, 1);
        g.add(2, 2);
        assert_eq!(g.bits(), 0x060305);
    }

    #[test]
    fn test_add_undirected() {
        let mut g = FixedWordGraph::new(3).unwrap();
        g.add_undirected(1, 0);
        assert_eq!(g.bits(), 0x000102);
    }

    #[test]
    fn test_clear() {
        let mut g = graph(0x060305);
        g.clear(1, 0);
        g.clear(1, 2);
        assert_eq!(g.bits(), 0x060205);
    }

    #[test]
    fn test_swap() {
        let mut g = graph(0x060305);
        g.swap(0, 1);
        assert_eq!(g.bits(), 0x050603);
    }

    #[test]
    fn swap_with_itself_is_identity() {
        let mut g = graph(0x060305);
        g.swap(2, 2);
        assert_eq!(g.bits(), 0x060305);
    }

    #[test]
    fn reverse_transposes_full_word() {
        let mut g = FixedWordGraph::new(8).unwrap();
        g.add(0, 7);
        g.add(3, 5);
        g.add(6, 6);
        let r = g.reverse();
        assert_eq!(r.edges(), vec![(5, 3), (6, 6), (7, 0)]);
        assert_eq!(r.reverse(), g);
    }

    #[test]
    fn reverse_keeps_rank() {
        let r = graph(0x060305).reverse();
        assert_eq!(r.len(), 3);
        // rows {101, 011, 110} transpose to {011, 110, 101}
        assert_eq!(r.bits(), 0x050603);
    }

    #[test]
    fn degrees() {
        let g = graph(0x060305);
        assert_eq!((0..3).map(|i| g.out_degree(i)).collect::<Vec<_>>(), [2, 2, 2]);
        assert_eq!((0..3).map(|i| g.in_degree(i)).collect::<Vec<_>>(), [2, 2, 2]);

        let mut g = FixedWordGraph::new(8).unwrap();
        for i in 0..8 {
            g.add(i, 7);
        }
        assert_eq!(g.in_degree(7), 8);
        assert_eq!(g.out_degree(7), 1);
        assert_eq!(g.edge_count(), 8);
    }

    #[test]
    fn len_is_the_logical_rank() {
        assert_eq!(FixedWordGraph::new(5).unwrap().len(), 5);
        assert_eq!(FixedWordGraph::new(0).unwrap().len(), 0);
    }

    #[test]
    fn rank_above_capacity_is_rejected() {
        assert_eq!(
            FixedWordGraph::new(9),
            Err(GraphError::RankOutOfRange { rank: 9, capacity: 8 })
        );
    }

    #[test]
    fn from_bits_rejects_bits_outside_rank() {
        assert!(FixedWordGraph::from_bits(3, 1 << 3).is_err());
        assert!(FixedWordGraph::from_bits(3, 1 << 24).is_err());
        assert!(FixedWordGraph::from_bits(8, u64::MAX).is_ok());
        assert!(FixedWordGraph::from_bits(0, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_beyond_rank_panics() {
        let mut g = FixedWordGraph::new(3).unwrap();
        g.add(0, 3);
    }
}
