//! Per-graph configuration.

/// What `add_vertex` does when the id is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateVertexPolicy {
    /// Keep the existing vertex and its out-edges.
    #[default]
    Preserve,
    /// Replace the out-neighbor set with an empty one, dropping its out-edges.
    Reset,
    /// Fail with [`GraphError::DuplicateVertex`](super::GraphError::DuplicateVertex).
    Reject,
}

/// Graph configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Handling of repeated `add_vertex` calls.
    pub duplicate_vertex: DuplicateVertexPolicy,
}

impl GraphConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-vertex policy.
    pub fn with_duplicate_vertex(mut self, policy: DuplicateVertexPolicy) -> Self {
        self.duplicate_vertex = policy;
        self
    }
}
