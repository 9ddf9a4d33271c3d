//! Small directed graphs packed into dense bitsets, and exhaustive
//! enumeration of every graph of a given rank.
//!
//! Three representations share the [`Graph`] capability set and trade word
//! width for capacity:
//!
//! - [`FixedWordGraph`]: up to 8 nodes in one `u64`, every operation `O(1)`.
//! - [`RowArrayGraph`]: up to 16 nodes, one `u16` per row.
//! - [`PackedBitsetGraph`]: any rank, a flat bitset of `rank²` bits.
//!
//! [`new_graph`] picks the narrowest one for a rank, and [`generate`] /
//! [`generate_undirected`] list every graph obtained by adding a subset of
//! the candidate edges to an empty seed.
//!
//! ```
//! use dense_graph_enumeration::{Graph, generate_undirected, new_graph};
//!
//! let graphs = generate_undirected(new_graph(2).unwrap());
//! assert_eq!(graphs.len(), 8);
//! assert_eq!(graphs[0].edge_count(), 0);
//! assert_eq!(graphs[7].to_string(), "[(0 0) (0 1) (1 0) (1 1)]");
//! ```

pub mod enumerate;
pub mod error;
pub mod factory;
pub mod format;
pub mod graph;
pub mod graph16;
pub mod graph8;
pub mod graphn;
pub mod interop;

pub use enumerate::{
    Orientation, candidate_edges, enumerate_with, expected_count, generate, generate_undirected,
};
pub use error::{GraphError, Result};
pub use factory::{DenseGraph, new_graph};
pub use graph::Graph;
pub use graph16::RowArrayGraph;
pub use graph8::FixedWordGraph;
pub use graphn::PackedBitsetGraph;
