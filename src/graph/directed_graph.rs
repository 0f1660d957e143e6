//! Core graph structure: vertex ids mapped to their out-neighbor sets.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{DuplicateVertexPolicy, GraphConfig, GraphError, GraphResult};

/// An in-memory directed graph keyed by vertex id.
///
/// Neighbor sets have no defined iteration order, so traversals only
/// guarantee reachability and at-most-once visits, not a specific sequence.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    /// Adjacency: vertex id -> out-neighbor ids.
    vertices: HashMap<V, HashSet<V>>,
    /// Number of distinct directed edges.
    edge_count: usize,
    config: GraphConfig,
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Create a new empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: HashMap::new(),
            edge_count: 0,
            config,
        }
    }

    /// Create from pre-existing vertices and edges (used by the builder).
    ///
    /// Vertices go through [`add_vertex`](Self::add_vertex), so the configured
    /// duplicate policy applies. Every edge endpoint must be among `vertices`.
    pub fn from_parts<I, E>(vertices: I, edges: E, config: GraphConfig) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::with_config(config);
        for id in vertices {
            graph.add_vertex(id)?;
        }
        for (src, dst) in edges {
            graph.add_edge(src, dst)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The configuration this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Whether `id` has been added as a vertex.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Whether the directed edge `src -> dst` exists.
    pub fn has_edge(&self, src: &V, dst: &V) -> bool {
        self.vertices
            .get(src)
            .map(|neighbors| neighbors.contains(dst))
            .unwrap_or(false)
    }

    /// Iterate over all vertex ids, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Add a vertex with no out-edges.
    ///
    /// Returns `true` if the vertex is new. A repeated id is handled according
    /// to [`GraphConfig::duplicate_vertex`].
    pub fn add_vertex(&mut self, id: V) -> GraphResult<bool> {
        let Some(neighbors) = self.vertices.get_mut(&id) else {
            self.vertices.insert(id, HashSet::new());
            return Ok(true);
        };

        match self.config.duplicate_vertex {
            DuplicateVertexPolicy::Preserve => {
                log::debug!("Vertex {:?} already present, keeping its edges", id);
                Ok(false)
            }
            DuplicateVertexPolicy::Reset => {
                log::debug!(
                    "Vertex {:?} re-added, dropping {} out-edges",
                    id,
                    neighbors.len()
                );
                self.edge_count -= neighbors.len();
                neighbors.clear();
                Ok(false)
            }
            DuplicateVertexPolicy::Reject => Err(GraphError::duplicate_vertex(&id)),
        }
    }

    /// Add a directed edge `src -> dst` between two existing vertices.
    ///
    /// Returns `true` if the edge is new. Self-loops are allowed.
    pub fn add_edge(&mut self, src: V, dst: V) -> GraphResult<bool> {
        self.require_vertex(&src)?;
        self.require_vertex(&dst)?;

        let neighbors = self
            .vertices
            .get_mut(&src)
            .ok_or_else(|| GraphError::vertex_not_found(&src))?;

        let inserted = neighbors.insert(dst);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Get the out-neighbors of a vertex.
    pub fn get_neighbors(&self, id: &V) -> GraphResult<&HashSet<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// Fail with `VertexNotFound` unless `id` is a vertex.
    pub(crate) fn require_vertex(&self, id: &V) -> GraphResult<()> {
        if self.vertices.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(id))
        }
    }
}

impl<V> Default for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
