use crate::graph::{Cost, VertexId};

/// Errors raised by graph construction, edge access and shortest-path queries.
///
/// Every error is returned before any state is touched, so a failed call
/// leaves the graph exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vertex {vertex} out of range, expected a label in 1..={vertex_count}")]
    InvalidVertexIndex {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("invalid weight {weight} for edge {from} -> {to}, weights must be finite and non-negative")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: Cost,
    },

    #[error("cost of edge {from} -> {to} overflows the finite cost range")]
    CostOverflow { from: VertexId, to: VertexId },

    #[error("result covers {result} vertices but the graph has {graph}")]
    ResultMismatch { result: usize, graph: usize },

    #[error("unknown selection strategy {0:?}, possible options are: (\"scan\", \"heap\")")]
    UnknownSelection(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
