//! digraph — an in-memory directed graph with traversal and pathfinding.
//!
//! Vertices are opaque hashable ids; edges are directed and unweighted.
//! Traversals (BFT, DFT) report every reachable vertex once; searches
//! (BFS, DFS) return a path between two vertices when one exists.

pub mod collections;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::{Queue, Stack};
pub use graph::{DirectedGraph, GraphBuilder};
pub use types::{DuplicateVertexPolicy, GraphConfig, GraphError, GraphResult};
