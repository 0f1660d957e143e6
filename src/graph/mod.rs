//! In-memory directed graph and its traversal and search algorithms.

pub mod builder;
pub mod directed_graph;
pub mod search;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::DirectedGraph;
