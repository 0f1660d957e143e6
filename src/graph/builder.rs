//! Fluent API for building DirectedGraph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphConfig, GraphResult};

use super::DirectedGraph;

/// Fluent builder for constructing a DirectedGraph.
///
/// Endpoints are validated in [`build`](Self::build), so edges may be
/// declared before their vertices.
pub struct GraphBuilder<V> {
    config: GraphConfig,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V> GraphBuilder<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, id: V) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, ids: I) -> &mut Self {
        self.vertices.extend(ids);
        self
    }

    /// Add a directed edge `src -> dst`.
    pub fn edge(&mut self, src: V, dst: V) -> &mut Self {
        self.edges.push((src, dst));
        self
    }

    /// Add several directed edges.
    pub fn edges<I: IntoIterator<Item = (V, V)>>(&mut self, pairs: I) -> &mut Self {
        self.edges.extend(pairs);
        self
    }

    /// Build the final DirectedGraph.
    pub fn build(self) -> GraphResult<DirectedGraph<V>> {
        DirectedGraph::from_parts(self.vertices, self.edges, self.config)
    }
}

impl<V> Default for GraphBuilder<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
