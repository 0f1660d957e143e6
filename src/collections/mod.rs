//! Generic containers backing the traversal and search loops.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
