//! Graphs of arbitrary rank stored as a flat bitset of `rank * rank` bits.
//!
//! Edge `i -> j` lives at bit `p = i * rank + j`, which is bit `p % 64` of
//! word `p / 64`. Rows are contiguous bit ranges but generally not word
//! aligned, so whole-row operations walk the range one word at a time.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, check_node};

const WORD_BITS: usize = u64::BITS as usize;

/// Directed graph with an arbitrary number of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PackedBitsetGraph {
    g: Vec<u64>,
    rank: usize,
}

impl PackedBitsetGraph {
    /// Constructs an edgeless graph with the given number of nodes.
    pub fn new(rank: usize) -> Result<Self> {
        let bits = rank.checked_mul(rank).ok_or(GraphError::RankOutOfRange {
            rank,
            capacity: usize::MAX.isqrt(),
        })?;
        Ok(Self {
            g: vec![0; bits.div_ceil(WORD_BITS)],
            rank,
        })
    }

    /// The backing words, `ceil(rank² / 64)` of them.
    pub fn words(&self) -> &[u64] {
        &self.g
    }

    #[inline]
    fn get(&self, p: usize) -> bool {
        self.g[p / WORD_BITS] & (1u64 << (p % WORD_BITS)) != 0
    }

    #[inline]
    fn set(&mut self, p: usize) {
        self.g[p / WORD_BITS] |= 1u64 << (p % WORD_BITS);
    }

    #[inline]
    fn unset(&mut self, p: usize) {
        self.g[p / WORD_BITS] &= !(1u64 << (p % WORD_BITS));
    }

    /// Exchanges bits `p` and `q`.
    fn exchange(&mut self, p: usize, q: usize) {
        if self.get(p) != self.get(q) {
            self.g[p / WORD_BITS] ^= 1u64 << (p % WORD_BITS);
            self.g[q / WORD_BITS] ^= 1u64 << (q % WORD_BITS);
        }
    }

    /// Counts set bits in `start..end`.
    fn count_range(&self, start: usize, end: usize) -> usize {
        let mut count = 0;
        let mut p = start;
        while p < end {
            let offset = p % WORD_BITS;
            let width = (WORD_BITS - offset).min(end - p);
            let mask = if width == WORD_BITS {
                u64::MAX
            } else {
                ((1u64 << width) - 1) << offset
            };
            count += (self.g[p / WORD_BITS] & mask).count_ones() as usize;
            p += width;
        }
        count
    }

    #[track_caller]
    fn check(&self, i: usize, j: usize) {
        check_node(i, self.rank);
        check_node(j, self.rank);
    }
}

impl Graph for PackedBitsetGraph {
    fn add(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.set(i * self.rank + j);
    }

    fn clear(&mut self, i: usize, j: usize) {
        self.check(i, j);
        self.unset(i * self.rank + j);
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.check(i, j);
        if i == j {
            return;
        }
        let n = self.rank;
        for k in 0..n {
            self.exchange(i * n + k, j * n + k);
        }
        for k in 0..n {
            self.exchange(k * n + i, k * n + j);
        }
    }

    fn has(&self, i: usize, j: usize) -> bool {
        self.check(i, j);
        self.get(i * self.rank + j)
    }

    fn reverse(&self) -> Self {
        let mut h = Self {
            g: vec![0; self.g.len()],
            rank: self.rank,
        };
        for (w, &word) in self.g.iter().enumerate() {
            let mut word = word;
            while word != 0 {
                let p = w * WORD_BITS + word.trailing_zeros() as usize;
                let (i, j) = (p / self.rank, p % self.rank);
                h.set(j * self.rank + i);
                word &= word - 1;
            }
        }
        h
    }

    fn out_degree(&self, i: usize) -> usize {
        check_node(i, self.rank);
        self.count_range(i * self.rank, (i + 1) * self.rank)
    }

    fn in_degree(&self, i: usize) -> usize {
        check_node(i, self.rank);
        (0..self.rank)
            .filter(|&k| self.get(k * self.rank + i))
            .count()
    }

    fn len(&self) -> usize {
        self.rank
    }

    fn edge_count(&self) -> usize {
        self.g.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl fmt::Display for PackedBitsetGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_list(self))
    }
}
