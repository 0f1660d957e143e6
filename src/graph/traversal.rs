//! Graph traversal algorithms (BFT, DFT).
//!
//! Each traversal visits every vertex reachable from the start exactly once.
//! Duplicates are filtered when an id leaves the queue or stack, not when it
//! enters, so a vertex can be queued several times before its first visit.

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
    /// Breadth-first traversal from `start`, returning the visit order.
    pub fn bft(&self, start: &V) -> GraphResult<Vec<V>> {
        let mut order = Vec::new();
        self.bft_with(start, |id| order.push(id.clone()))?;
        Ok(order)
    }

    /// Breadth-first traversal from `start`, calling `visit` once per vertex.
    pub fn bft_with<F>(&self, start: &V, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(&V),
    {
        let mut queue = Queue::new();
        queue.enqueue(start.clone());
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(current) = queue.dequeue() {
            if visited.contains(&current) {
                continue;
            }
            let neighbors = self.get_neighbors(&current)?;
            log::trace!("bft visit {:?}", current);
            visit(&current);
            for neighbor in neighbors {
                queue.enqueue(neighbor.clone());
            }
            visited.insert(current);
        }

        log::debug!("bft from {:?} visited {} vertices", start, visited.len());
        Ok(())
    }

    /// Iterative depth-first traversal from `start`, returning the visit order.
    pub fn dft(&self, start: &V) -> GraphResult<Vec<V>> {
        let mut order = Vec::new();
        self.dft_with(start, |id| order.push(id.clone()))?;
        Ok(order)
    }

    /// Iterative depth-first traversal from `start`, calling `visit` once per vertex.
    pub fn dft_with<F>(&self, start: &V, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(&V),
    {
        let mut stack = Stack::new();
        stack.push(start.clone());
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            let neighbors = self.get_neighbors(&current)?;
            log::trace!("dft visit {:?}", current);
            visit(&current);
            for neighbor in neighbors {
                stack.push(neighbor.clone());
            }
            visited.insert(current);
        }

        log::debug!("dft from {:?} visited {} vertices", start, visited.len());
        Ok(())
    }

    /// Recursive depth-first traversal from `start`, returning the visit order.
    ///
    /// Uses the call stack, so recursion depth grows with the longest simple
    /// path explored. Prefer [`dft`](Self::dft) on very deep graphs.
    pub fn dft_recursive(&self, start: &V) -> GraphResult<Vec<V>> {
        let mut order = Vec::new();
        self.dft_recursive_with(start, |id| order.push(id.clone()))?;
        Ok(order)
    }

    /// Recursive depth-first traversal from `start`, calling `visit` once per vertex.
    pub fn dft_recursive_with<F>(&self, start: &V, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(&V),
    {
        let mut visited: HashSet<V> = HashSet::new();
        self.dft_recurse(start, &mut visited, &mut visit)?;
        log::debug!(
            "dft_recursive from {:?} visited {} vertices",
            start,
            visited.len()
        );
        Ok(())
    }

    fn dft_recurse<F>(
        &self,
        current: &V,
        visited: &mut HashSet<V>,
        visit: &mut F,
    ) -> GraphResult<()>
    where
        F: FnMut(&V),
    {
        let neighbors = self.get_neighbors(current)?;
        // Mark before recursing so cycles back to `current` stop here.
        visited.insert(current.clone());
        log::trace!("dft_recursive visit {:?}", current);
        visit(current);
        for neighbor in neighbors {
            if !visited.contains(neighbor) {
                self.dft_recurse(neighbor, visited, visit)?;
            }
        }
        Ok(())
    }
}
