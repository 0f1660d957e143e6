//! Shared types: errors and configuration.

pub mod config;
pub mod error;

pub use config::{DuplicateVertexPolicy, GraphConfig};
pub use error::{GraphError, GraphResult};
