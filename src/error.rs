use thiserror::Error;

/// Errors raised while building, validating or rendering a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The requested rank does not fit the chosen representation.
    #[error("rank {rank} is out of range, capacity is {capacity} nodes")]
    RankOutOfRange { rank: usize, capacity: usize },

    /// A node index outside `0..rank`.
    #[error("node {node} is out of range for a graph of rank {rank}")]
    NodeOutOfRange { node: usize, rank: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
