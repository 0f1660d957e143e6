//! Error types for the digraph library.

use thiserror::Error;

/// All errors that can occur in the digraph library.
///
/// An unreachable destination is not an error: searches report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was referenced that was never added to the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// A vertex was added twice under [`DuplicateVertexPolicy::Reject`](super::DuplicateVertexPolicy::Reject).
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),
}

impl GraphError {
    /// Build a `VertexNotFound` error naming `id`.
    pub fn vertex_not_found<V: std::fmt::Debug>(id: &V) -> Self {
        GraphError::VertexNotFound(format!("{:?}", id))
    }

    /// Build a `DuplicateVertex` error naming `id`.
    pub fn duplicate_vertex<V: std::fmt::Debug>(id: &V) -> Self {
        GraphError::DuplicateVertex(format!("{:?}", id))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
