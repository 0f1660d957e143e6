//! Path search algorithms (BFS, DFS).
//!
//! A search returns `Ok(Some(path))` with both endpoints included,
//! `Ok(None)` when the destination is unreachable, and `VertexNotFound`
//! when either endpoint is not in the graph.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::collections::{Queue, Stack};
use crate::types::GraphResult;

use super::DirectedGraph;

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Shortest path (fewest edges) from `start` to `dest`.
    pub fn bfs(&self, start: &V, dest: &V) -> GraphResult<Option<Vec<V>>> {
        self.require_vertex(start)?;
        self.require_vertex(dest)?;

        let mut queue: Queue<Vec<V>> = Queue::new();
        queue.enqueue(vec![start.clone()]);
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(path) = queue.dequeue() {
            let Some(last) = path.last() else {
                continue;
            };
            if last == dest {
                log::debug!("bfs {:?} -> {:?}: {} edges", start, dest, path.len() - 1);
                return Ok(Some(path));
            }
            if !visited.insert(last.clone()) {
                continue;
            }
            for neighbor in self.get_neighbors(last)? {
                let mut next = path.clone();
                next.push(neighbor.clone());
                queue.enqueue(next);
            }
        }

        log::debug!("bfs {:?} -> {:?}: unreachable", start, dest);
        Ok(None)
    }

    /// Some path from `start` to `dest`, found depth-first with an explicit stack.
    ///
    /// The path is valid but not necessarily the shortest.
    pub fn dfs(&self, start: &V, dest: &V) -> GraphResult<Option<Vec<V>>> {
        self.require_vertex(start)?;
        self.require_vertex(dest)?;

        let mut stack: Stack<Vec<V>> = Stack::new();
        stack.push(vec![start.clone()]);
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(path) = stack.pop() {
            let Some(last) = path.last() else {
                continue;
            };
            if last == dest {
                log::debug!("dfs {:?} -> {:?}: {} edges", start, dest, path.len() - 1);
                return Ok(Some(path));
            }
            if !visited.insert(last.clone()) {
                continue;
            }
            for neighbor in self.get_neighbors(last)? {
                let mut next = path.clone();
                next.push(neighbor.clone());
                stack.push(next);
            }
        }

        log::debug!("dfs {:?} -> {:?}: unreachable", start, dest);
        Ok(None)
    }

    /// Some path from `start` to `dest`, found by recursive depth-first search.
    ///
    /// Recursion depth grows with the length of the path being explored.
    pub fn dfs_recursive(&self, start: &V, dest: &V) -> GraphResult<Option<Vec<V>>> {
        self.require_vertex(start)?;
        self.require_vertex(dest)?;

        let mut visited: HashSet<V> = HashSet::new();
        let mut path: Vec<V> = Vec::new();
        let found = self.dfs_recurse(start, dest, &mut visited, &mut path)?;

        if found {
            log::debug!(
                "dfs_recursive {:?} -> {:?}: {} edges",
                start,
                dest,
                path.len() - 1
            );
            Ok(Some(path))
        } else {
            log::debug!("dfs_recursive {:?} -> {:?}: unreachable", start, dest);
            Ok(None)
        }
    }

    /// Extends `path` with `current`; on a dead end, restores it and returns false.
    fn dfs_recurse(
        &self,
        current: &V,
        dest: &V,
        visited: &mut HashSet<V>,
        path: &mut Vec<V>,
    ) -> GraphResult<bool> {
        visited.insert(current.clone());
        path.push(current.clone());
        if current == dest {
            return Ok(true);
        }

        for neighbor in self.get_neighbors(current)? {
            if !visited.contains(neighbor) && self.dfs_recurse(neighbor, dest, visited, path)? {
                return Ok(true);
            }
        }

        path.pop();
        Ok(false)
    }

    /// Whether `path` is non-empty and follows existing edges from end to end.
    pub fn is_path(&self, path: &[V]) -> bool {
        match path.first() {
            Some(first) if self.contains_vertex(first) => path
                .windows(2)
                .all(|pair| self.has_edge(&pair[0], &pair[1])),
            _ => false,
        }
    }
}
